//! 保存するアイデアのレコードと、保存時に採番される ID

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::related_item::RelatedItem;
use super::summary::Summary;

/// 1 回の実行で 1 件だけ作られ、1 回だけ書き込まれるレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub related: Vec<RelatedItem>,
    /// ISO8601（UTC、ミリ秒、末尾 Z）
    pub created_at: String,
}

impl IdeaRecord {
    pub fn new(summary: Summary, related: Vec<RelatedItem>, created_at: DateTime<Utc>) -> Self {
        Self {
            summary: summary.summary,
            tags: summary.tags,
            related,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// 保存先が採番したドキュメント ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for DocumentId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_created_at_is_iso8601_millis_utc() {
        let rec = IdeaRecord::new(Summary::fallback("x"), vec![], fixed_time());
        assert_eq!(rec.created_at, "2026-10-19T08:30:00.000Z");
    }

    #[test]
    fn test_serialize_document_shape() {
        let rec = IdeaRecord::new(
            Summary {
                summary: Some("An app for dog walkers".to_string()),
                tags: vec!["pets".to_string(), "mobile".to_string()],
            },
            vec![RelatedItem {
                title: "Rover".to_string(),
                url: "https://rover.example".to_string(),
                summary: "Dog walking marketplace".to_string(),
            }],
            fixed_time(),
        );
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["summary"], "An app for dog walkers");
        assert_eq!(v["tags"], serde_json::json!(["pets", "mobile"]));
        assert_eq!(v["related"][0]["title"], "Rover");
        assert_eq!(v["createdAt"], "2026-10-19T08:30:00.000Z");
        assert!(v.get("created_at").is_none());
    }

    #[test]
    fn test_absent_summary_is_omitted() {
        let rec = IdeaRecord::new(
            Summary {
                summary: None,
                tags: vec![],
            },
            vec![],
            fixed_time(),
        );
        let v = serde_json::to_value(&rec).unwrap();
        assert!(v.get("summary").is_none());
        assert_eq!(v["tags"], serde_json::json!([]));
        assert_eq!(v["related"], serde_json::json!([]));
    }
}
