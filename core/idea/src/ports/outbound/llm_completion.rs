//! 単発 LLM 完了の Outbound ポート
//!
//! 1 回のプロンプトで全文応答を取得する（要約とタグの生成に利用）。

use common::error::Error;

/// 単発の LLM 完了（プロンプト 1 つで応答文字列を取得）
pub trait LlmCompletion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, Error>;
}
