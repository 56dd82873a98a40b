//! アイデアレコード保存の Outbound ポート

use crate::domain::{DocumentId, IdeaRecord};
use common::error::Error;

/// レコードを 1 件挿入し、採番された ID を返す
///
/// 接続は呼び出しの中で開いて閉じる。重複排除はしない。
pub trait IdeaStore: Send + Sync {
    fn save(&self, record: &IdeaRecord) -> Result<DocumentId, Error>;
}
