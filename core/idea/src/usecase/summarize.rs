//! 要約ステップ: プロンプト組み立て、LLM 呼び出し、応答の整形と解析
//!
//! 応答が JSON として読めない場合はエラーにせず Fallback を返す。
//! LLM 呼び出し自体の失敗（通信エラー等）はそのまま Err で返す。

use crate::domain::{IdeaText, RelatedItem, Summary, SummaryOutcome};
use crate::ports::outbound::LlmCompletion;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

const FENCE: &str = "```";

fn fence_with_lang() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(?:json|javascript)?").expect("fence pattern is valid"))
}

/// 関連情報を "<番号>. <title>\n<url>\n<summary>" の形で空行区切りに並べる（番号は 1 始まり）
pub fn format_related(related: &[RelatedItem]) -> String {
    related
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}\n{}\n{}", i + 1, r.title, r.url, r.summary))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// LLM に送るプロンプト
pub fn build_prompt(idea: &str, related: &[RelatedItem]) -> String {
    let listing = if related.is_empty() {
        "(no related results)".to_string()
    } else {
        format_related(related)
    };
    format!(
        "You are helping someone keep a notebook of ideas.\n\
         Summarize the idea below in one or two sentences and pick 3 to 5 short topical tags.\n\
         Use the related web results only as context.\n\
         \n\
         Idea:\n\
         {idea}\n\
         \n\
         Related web results:\n\
         {listing}\n\
         \n\
         Respond with JSON only, in exactly this shape:\n\
         {{\"summary\": \"...\", \"tags\": [\"...\", \"...\"]}}",
        idea = idea,
        listing = listing,
    )
}

/// 応答テキストからコードフェンスを取り除く。何度かけても結果は変わらない
pub fn clean_model_text(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.contains(FENCE) {
        return trimmed.to_string();
    }
    let without_tagged = fence_with_lang().replace_all(trimmed, "");
    without_tagged.replace(FENCE, "").trim().to_string()
}

/// 整形済みテキストを JSON として解析する。失敗するのは JSON として読めない場合だけ
pub fn parse_summary(cleaned: &str) -> Result<Summary, Error> {
    let value: Value = serde_json::from_str(cleaned)?;
    Ok(Summary::from_json(&value))
}

/// 要約ステップ
pub struct Summarizer {
    llm: Arc<dyn LlmCompletion>,
    log: Arc<dyn Log>,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn LlmCompletion>, log: Arc<dyn Log>) -> Self {
        Self { llm, log }
    }

    pub fn summarize(&self, idea: &IdeaText, related: &[RelatedItem]) -> Result<SummaryOutcome, Error> {
        let prompt = build_prompt(idea, related);
        let text = self.llm.complete(&prompt)?;
        let cleaned = clean_model_text(&text);
        match parse_summary(&cleaned) {
            Ok(summary) => {
                self.log.emit(
                    LogRecord::new(LogLevel::Info, "summary parsed")
                        .layer("usecase")
                        .kind("summarize")
                        .field("tags", summary.tags.len()),
                );
                Ok(SummaryOutcome::Parsed(summary))
            }
            Err(e) => {
                self.log.emit(
                    LogRecord::new(
                        LogLevel::Warn,
                        format!("could not parse model response as JSON ({}): {}", e, cleaned),
                    )
                    .layer("usecase")
                    .kind("summarize")
                    .field("raw", cleaned.clone()),
                );
                Ok(SummaryOutcome::Fallback {
                    summary: Summary::fallback(idea),
                    raw: cleaned,
                })
            }
        }
    }
}
