//! LLM が返す要約とタグ、およびその取得結果

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 要約に失敗したときに付けるタグ
pub const FALLBACK_TAG: &str = "unclassified";

/// LLM 応答から取り出した要約とタグ
///
/// JSON として読めれば形の検証はしない（[`Summary::from_json`]）。`summary` が無ければ None、
/// `tags` が無ければ空配列のまま保存まで運ぶ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Summary {
    /// 解析済みの JSON 値から取り出す。形の合わない項目は無かったものとして扱う。
    /// 文字列 1 つの `tags` はタグ 1 件とみなし、配列中の文字列以外は捨てる。
    pub fn from_json(value: &Value) -> Self {
        let summary = value
            .get("summary")
            .and_then(Value::as_str)
            .map(str::to_string);
        let tags = match value.get("tags") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(tag)) => vec![tag.clone()],
            _ => Vec::new(),
        };
        Self { summary, tags }
    }

    /// 解析失敗時の既定値: 要約はアイデア本文、タグは ["unclassified"]
    pub fn fallback(idea: &str) -> Self {
        Self {
            summary: Some(idea.to_string()),
            tags: vec![FALLBACK_TAG.to_string()],
        }
    }
}

/// 要約ステップの結果。失敗はエラーではなく Fallback として表す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Parsed(Summary),
    /// `raw` は解析できなかった応答テキスト（整形後）
    Fallback { summary: Summary, raw: String },
}

impl SummaryOutcome {
    pub fn into_summary(self) -> Summary {
        match self {
            Self::Parsed(s) => s,
            Self::Fallback { summary, .. } => summary,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_value() {
        let s = Summary::fallback("dog walking app");
        assert_eq!(s.summary.as_deref(), Some("dog walking app"));
        assert_eq!(s.tags, vec!["unclassified".to_string()]);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let s: Summary = serde_json::from_str("{}").unwrap();
        assert_eq!(s.summary, None);
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let s: Summary =
            serde_json::from_str(r#"{"summary":"x","tags":["a"],"confidence":0.9}"#).unwrap();
        assert_eq!(s.summary.as_deref(), Some("x"));
        assert_eq!(s.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_from_json_keeps_summary_when_tags_is_a_string() {
        let v = serde_json::json!({"summary": "An app for dog walkers", "tags": "pets"});
        let s = Summary::from_json(&v);
        assert_eq!(s.summary.as_deref(), Some("An app for dog walkers"));
        assert_eq!(s.tags, vec!["pets".to_string()]);
    }

    #[test]
    fn test_from_json_odd_shapes() {
        let s = Summary::from_json(&serde_json::json!(["a", "b"]));
        assert_eq!(s, Summary { summary: None, tags: vec![] });

        let s = Summary::from_json(&serde_json::json!({"summary": 3, "tags": ["a", 1, null, "b"]}));
        assert_eq!(s.summary, None);
        assert_eq!(s.tags, vec!["a".to_string(), "b".to_string()]);

        let s = Summary::from_json(&serde_json::json!("just a string"));
        assert_eq!(s, Summary { summary: None, tags: vec![] });
    }

    #[test]
    fn test_outcome_accessors() {
        let parsed = SummaryOutcome::Parsed(Summary {
            summary: Some("x".to_string()),
            tags: vec![],
        });
        assert!(!parsed.is_fallback());
        assert_eq!(parsed.into_summary().summary.as_deref(), Some("x"));

        let fb = SummaryOutcome::Fallback {
            summary: Summary::fallback("idea"),
            raw: "not json".to_string(),
        };
        assert!(fb.is_fallback());
        assert_eq!(fb.into_summary().tags, vec!["unclassified".to_string()]);
    }
}
