//! 標準環境変数解決実装（std::env を委譲）

use crate::ports::outbound::EnvResolver;
use std::env;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}
