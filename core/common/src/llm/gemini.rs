//! Geminiプロバイダの実装（generateContent、非ストリーミング）

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// モデル未指定時のデフォルト
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Geminiプロバイダ
pub struct GeminiProvider {
    model: ModelName,
    api_key: ApiKey,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（None の場合は DEFAULT_GEMINI_MODEL）
    /// * `api_key` - 設定から解決済みの API キー
    pub fn new(model: Option<ModelName>, api_key: ApiKey) -> Self {
        let model = model.unwrap_or_else(|| ModelName::new(DEFAULT_GEMINI_MODEL));
        Self { model, api_key }
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }
}

/// 非 2xx 応答の本文からエラーメッセージを取り出す
fn error_message(status: reqwest::StatusCode, response_text: &str) -> String {
    serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE,
            self.model,
            self.api_key.expose()
        );

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            return Err(Error::http_status(
                status.as_u16(),
                format!("Gemini API error: {}", error_message(status, &response_text)),
            ));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // 全 part のテキストを連結（thought 等テキストを持たない part は無視）
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .filter(|s| !s.is_empty());

        Ok(text)
    }
}
