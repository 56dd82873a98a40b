//! Echoプロバイダの実装
//!
//! 実際のLLM APIは呼び出さず、送られたプロンプトをそのまま応答テキストとして返します。
//! オフラインでの動作確認やテストに使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({ "prompt": prompt }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // ネットワークには出ず、リクエストをそのまま応答として扱う
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)?;
        Ok(v["prompt"].as_str().map(|s| s.to_string()))
    }
}
