//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::{CaptureReport, IdeaText};
use common::error::Error;

/// アイデアを 検索 → 要約 → 保存 する Inbound ポート
///
/// main はこの trait を実装した型（CaptureUseCase）の capture を呼び出す。
pub trait CaptureIdea: Send + Sync {
    fn capture(&self, idea: &IdeaText) -> Result<CaptureReport, Error>;
}
