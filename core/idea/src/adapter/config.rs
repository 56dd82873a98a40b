//! 実行設定の解決（adapter 層）
//!
//! 起動時に 1 回だけ EnvResolver から組み立て、各アダプタへ値で渡す。

use common::domain::{ApiKey, ModelName};
use common::error::Error;
use common::llm::ProviderType;
use common::ports::outbound::EnvResolver;
use std::path::PathBuf;

pub const DEFAULT_SEARCH_URL: &str = "https://api.tavily.com/search";
pub const DEFAULT_DATABASE: &str = "ai_workshop";
pub const DEFAULT_COLLECTION: &str = "ideas";

/// Web 検索の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_key: ApiKey,
    pub url: String,
}

/// LLM の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: ProviderType,
    pub model: Option<ModelName>,
    pub api_key: Option<ApiKey>,
}

/// 保存先の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

/// 実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub llm: LlmConfig,
    /// --dry-run のときは None（MONGODB_URI を要求しない）
    pub store: Option<StoreConfig>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// 環境変数から設定を組み立てる。必須の値が無ければ Error::Env
    pub fn resolve(env: &dyn EnvResolver, dry_run: bool) -> Result<Self, Error> {
        let search = SearchConfig {
            api_key: ApiKey::new(env.require("TAVILY_API_KEY")?),
            url: env.var_or("TAVILY_SEARCH_URL", DEFAULT_SEARCH_URL),
        };

        let provider_name = env.var_or("IDEA_LLM_PROVIDER", ProviderType::Gemini.as_str());
        let provider = ProviderType::parse(&provider_name).ok_or_else(|| {
            Error::env(format!(
                "IDEA_LLM_PROVIDER has unknown provider '{}' (expected gemini or echo)",
                provider_name
            ))
        })?;
        let api_key = if provider.requires_api_key() {
            Some(ApiKey::new(env.require("GEMINI_API_KEY")?))
        } else {
            None
        };
        let llm = LlmConfig {
            provider,
            model: env.var("IDEA_MODEL").map(ModelName::new),
            api_key,
        };

        let store = if dry_run {
            None
        } else {
            Some(StoreConfig {
                uri: env.require("MONGODB_URI")?,
                database: env.var_or("MONGODB_DB", DEFAULT_DATABASE),
                collection: env.var_or("MONGODB_COLLECTION", DEFAULT_COLLECTION),
            })
        };

        Ok(Self {
            search,
            llm,
            store,
            log_file: env.var("IDEA_LOG_FILE").map(PathBuf::from),
        })
    }
}
