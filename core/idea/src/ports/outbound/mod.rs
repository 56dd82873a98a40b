//! Outbound ポート: アプリが外界（Web 検索・LLM・DB）を使うための trait
//!
//! ログ・時刻・環境変数のポートは common::ports::outbound にある。

pub mod idea_store;
pub mod llm_completion;
pub mod web_search;

pub use idea_store::IdeaStore;
pub use llm_completion::LlmCompletion;
pub use web_search::WebSearch;
