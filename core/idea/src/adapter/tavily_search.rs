//! Tavily Search API による WebSearch 実装
//!
//! リトライやタイムアウト設定は行わず、reqwest の既定値に任せる。

use crate::adapter::config::SearchConfig;
use crate::domain::RelatedItem;
use crate::ports::outbound::WebSearch;
use common::error::Error;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// 取得する検索結果の上限
pub const MAX_RESULTS: usize = 3;

const SEARCH_DEPTH: &str = "basic";

/// Tavily 検索アダプタ
pub struct TavilySearch {
    config: SearchConfig,
}

impl TavilySearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    fn request_body(&self, query: &str) -> Value {
        json!({
            "api_key": self.config.api_key.expose(),
            "query": query,
            "search_depth": SEARCH_DEPTH,
            "max_results": MAX_RESULTS,
        })
    }
}

/// 非 2xx 応答をステータスコードと理由句つきのエラーにする
fn status_error(status: StatusCode) -> Error {
    Error::http_status(
        status.as_u16(),
        format!(
            "Search request failed: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status")
        ),
    )
}

/// 応答 JSON の `results` を関連情報に変換する。
/// `results` が無い・null・配列でない場合は空。
pub fn map_results(body: &Value) -> Vec<RelatedItem> {
    body.get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .take(MAX_RESULTS)
                .map(|hit| {
                    RelatedItem::from_search_hit(
                        hit.get("title").and_then(Value::as_str),
                        hit.get("url").and_then(Value::as_str),
                        hit.get("content").and_then(Value::as_str),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

impl WebSearch for TavilySearch {
    fn search(&self, query: &str) -> Result<Vec<RelatedItem>, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.config.url)
            .json(&self.request_body(query))
            .send()
            .map_err(|e| Error::http(format!("Search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read search response: {}", e)))?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| Error::json(format!("Failed to parse search response JSON: {}", e)))?;

        Ok(map_results(&body))
    }
}
