//! MongoDB への IdeaStore 実装（同期 API）
//!
//! 呼び出しごとにクライアントを作り、関数を抜けるときに破棄する。
//! 挿入に失敗した場合も接続はスコープ終了で閉じられる。

use crate::adapter::config::StoreConfig;
use crate::domain::{DocumentId, IdeaRecord};
use crate::ports::outbound::IdeaStore;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use mongodb::bson::Bson;
use mongodb::sync::Client;
use std::sync::Arc;

pub struct MongoIdeaStore {
    config: StoreConfig,
    log: Arc<dyn Log>,
}

impl MongoIdeaStore {
    pub fn new(config: StoreConfig, log: Arc<dyn Log>) -> Self {
        Self { config, log }
    }

    fn insert(&self, record: &IdeaRecord) -> Result<DocumentId, Error> {
        let client = Client::with_uri_str(&self.config.uri)
            .map_err(|e| Error::db(format!("MongoDB connection failed: {}", e)))?;
        let collection = client
            .database(&self.config.database)
            .collection::<IdeaRecord>(&self.config.collection);
        let result = collection
            .insert_one(record, None)
            .map_err(|e| Error::db(format!("MongoDB insert failed: {}", e)))?;
        Ok(document_id_from_bson(&result.inserted_id))
    }
}

/// 採番された _id を文字列にする（ObjectId は 16 進表記）
pub fn document_id_from_bson(id: &Bson) -> DocumentId {
    match id {
        Bson::ObjectId(oid) => DocumentId::new(oid.to_hex()),
        Bson::String(s) => DocumentId::new(s.clone()),
        other => DocumentId::new(other.to_string()),
    }
}

impl IdeaStore for MongoIdeaStore {
    fn save(&self, record: &IdeaRecord) -> Result<DocumentId, Error> {
        let result = self.insert(record);
        if let Err(ref e) = result {
            self.log.emit(
                LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("adapter")
                    .kind("persist")
                    .field("database", self.config.database.clone())
                    .field("collection", self.config.collection.clone()),
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RelatedItem, Summary};
    use chrono::TimeZone;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_document_id_from_object_id() {
        let oid = ObjectId::new();
        let id = document_id_from_bson(&Bson::ObjectId(oid));
        assert_eq!(id.to_string(), oid.to_hex());
        assert_eq!(id.len(), 24);
    }

    #[test]
    fn test_document_id_from_string() {
        let id = document_id_from_bson(&Bson::String("custom".to_string()));
        assert_eq!(&*id, "custom");
    }

    #[test]
    fn test_record_bson_shape() {
        let rec = IdeaRecord::new(
            Summary {
                summary: Some("An app for dog walkers".to_string()),
                tags: vec!["pets".to_string(), "mobile".to_string()],
            },
            vec![RelatedItem {
                title: "Rover".to_string(),
                url: "https://rover.example".to_string(),
                summary: "Marketplace".to_string(),
            }],
            chrono::Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap(),
        );
        let doc = mongodb::bson::to_document(&rec).unwrap();
        assert_eq!(doc.get_str("summary").unwrap(), "An app for dog walkers");
        assert_eq!(doc.get_array("tags").unwrap().len(), 2);
        let related = doc.get_array("related").unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(doc.get_str("createdAt").unwrap(), "2026-10-19T00:00:00.000Z");
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_invalid_uri_is_db_error() {
        let store = MongoIdeaStore::new(
            StoreConfig {
                uri: "not-a-mongodb-uri".to_string(),
                database: "ai_workshop".to_string(),
                collection: "ideas".to_string(),
            },
            Arc::new(common::adapter::NoopLog),
        );
        let rec = IdeaRecord::new(Summary::fallback("x"), vec![], chrono::Utc::now());
        let err = store.save(&rec).unwrap_err();
        assert!(matches!(err, Error::Db(_)));
        assert!(err.to_string().contains("MongoDB connection failed"));
    }
}
