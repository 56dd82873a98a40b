//! Web 検索結果 1 件を表す関連情報

use serde::{Deserialize, Serialize};

/// 関連情報の要約の最大文字数（バイト数ではなく文字数）
pub const RELATED_SUMMARY_MAX_CHARS: usize = 300;

/// タイトルが無い検索結果に付けるタイトル
pub const UNTITLED: &str = "Untitled";

/// 検索結果 1 件（保存ドキュメントの `related` 要素）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub title: String,
    pub url: String,
    pub summary: String,
}

impl RelatedItem {
    /// 検索結果の生フィールドから作る。title 無しは "Untitled"、content は先頭 300 文字まで
    pub fn from_search_hit(title: Option<&str>, url: Option<&str>, content: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or(UNTITLED).to_string(),
            url: url.unwrap_or_default().to_string(),
            summary: content.map(truncate_chars).unwrap_or_default(),
        }
    }
}

fn truncate_chars(s: &str) -> String {
    s.chars().take(RELATED_SUMMARY_MAX_CHARS).collect()
}
