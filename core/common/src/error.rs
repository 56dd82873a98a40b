//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードへの変換は `exit_code()` に集約する。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgs(String),

    /// 環境変数・設定の不足
    #[error("{0}")]
    Env(String),

    /// HTTP 通信の失敗。status は応答が得られた場合のみ
    #[error("{message}")]
    Http { status: Option<u16>, message: String },

    /// JSON のシリアライズ・デシリアライズ失敗
    #[error("{0}")]
    Json(String),

    /// データベース接続・書き込みの失敗
    #[error("{0}")]
    Db(String),

    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// 応答ステータスを伴わない HTTP エラー（接続失敗・読み込み失敗など）
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http {
            status: None,
            message: msg.into(),
        }
    }

    /// 非 2xx 応答による HTTP エラー
    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self::Http {
            status: Some(status),
            message: msg.into(),
        }
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn db(msg: impl Into<String>) -> Self {
        Self::Db(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 使い方の誤りか（main で usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }

    /// HTTP ステータスコード（あれば）
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            _ => None,
        }
    }

    /// プロセス終了コード。未回復のエラーはすべて 1
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
