//! 環境変数解決 Outbound ポート
//!
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の固定マップなど。
pub trait EnvResolver: Send + Sync {
    /// 変数の値を返す。未設定・空文字列は None
    fn var(&self, key: &str) -> Option<String>;

    /// 必須の変数を返す。無ければ Error::Env
    fn require(&self, key: &str) -> Result<String, Error> {
        self.var(key)
            .ok_or_else(|| Error::env(format!("{} environment variable is not set", key)))
    }

    /// 任意の変数を返す。無ければ default
    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvResolver for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|s| s.to_string())
        }
    }

    #[test]
    fn test_require_missing_is_env_error() {
        let env = MapEnv(HashMap::new());
        let err = env.require("TAVILY_API_KEY").unwrap_err();
        assert!(matches!(err, Error::Env(_)));
        assert!(err.to_string().contains("TAVILY_API_KEY"));
    }

    #[test]
    fn test_var_or_default() {
        let env = MapEnv(HashMap::from([("MONGODB_DB", "lab")]));
        assert_eq!(env.var_or("MONGODB_DB", "ai_workshop"), "lab");
        assert_eq!(env.var_or("MONGODB_COLLECTION", "ideas"), "ideas");
    }
}
