//! アダプター（ports::outbound の標準実装）

pub mod config;
pub mod llm_completion;
pub mod mongo_idea_store;
pub mod tavily_search;

pub use config::AppConfig;
pub use llm_completion::DriverLlmCompletion;
pub use mongo_idea_store::MongoIdeaStore;
pub use tavily_search::TavilySearch;
