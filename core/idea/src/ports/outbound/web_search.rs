//! Web 検索の Outbound ポート

use crate::domain::RelatedItem;
use common::error::Error;

/// クエリ 1 件で検索し、関連情報（最大 3 件）を返す
///
/// 非 2xx 応答は Error::Http（ステータス付き）。空の結果で代用はしない。
pub trait WebSearch: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<RelatedItem>, Error>;
}
