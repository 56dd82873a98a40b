//! Outbound ポート: アプリが外界（環境変数・時刻・ログ）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
