//! 実行結果として標準出力に出すレポート

use serde::Serialize;

use super::idea_record::{DocumentId, IdeaRecord};

/// 成功時に stdout に出す `{id, summary, tags}`
///
/// --dry-run で保存しなかった場合、`id` は None（JSON では null）になり、
/// 保存されるはずだったレコードを `record` に載せる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureReport {
    pub id: Option<DocumentId>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<IdeaRecord>,
}
