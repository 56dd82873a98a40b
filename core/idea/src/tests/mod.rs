//! ユースケース・main レベルのテスト（ネットワーク・DB には触れない）


use crate::domain::{DocumentId, IdeaRecord, RelatedItem};
use crate::ports::outbound::{IdeaStore, LlmCompletion, WebSearch};
use crate::usecase::{CaptureDeps, CaptureUseCase};
use chrono::{DateTime, TimeZone, Utc};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, Log, LogLevel, LogRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 固定の結果（またはエラー）を返す検索
pub(crate) struct FakeSearch {
    pub result: Result<Vec<RelatedItem>, Error>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn ok(items: Vec<RelatedItem>) -> Self {
        Self {
            result: Ok(items),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn err(e: Error) -> Self {
        Self {
            result: Err(e),
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl WebSearch for FakeSearch {
    fn search(&self, query: &str) -> Result<Vec<RelatedItem>, Error> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}

/// 固定テキストを返す LLM。受け取ったプロンプトを記録する
pub(crate) struct FakeLlm {
    pub response: Result<String, Error>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn text(s: &str) -> Self {
        Self {
            response: Ok(s.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn err(e: Error) -> Self {
        Self {
            response: Err(e),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl LlmCompletion for FakeLlm {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone()
    }
}

/// 挿入されたレコードを保持し、連番の ID を返すストア
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub saved: Mutex<Vec<IdeaRecord>>,
    pub fail_with: Option<Error>,
}

impl IdeaStore for MemoryStore {
    fn save(&self, record: &IdeaRecord) -> Result<DocumentId, Error> {
        if let Some(ref e) = self.fail_with {
            return Err(e.clone());
        }
        let mut saved = self.saved.lock().unwrap();
        saved.push(record.clone());
        Ok(DocumentId::new(format!("{:024x}", saved.len())))
    }
}

pub(crate) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(crate) fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
    ))
}

/// 出力されたレコードを保持する Log
#[derive(Default)]
pub(crate) struct RecordingLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// 固定マップの環境変数。参照回数を数える
pub(crate) struct MapEnv {
    vars: HashMap<String, String>,
    pub lookups: AtomicUsize,
}

impl MapEnv {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl EnvResolver for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.vars.get(key).cloned()
    }
}

pub(crate) fn related(n: usize) -> Vec<RelatedItem> {
    (1..=n)
        .map(|i| RelatedItem {
            title: format!("Result {}", i),
            url: format!("https://example.com/{}", i),
            summary: format!("Snippet {}", i),
        })
        .collect()
}

pub(crate) struct Harness {
    pub search: Arc<FakeSearch>,
    pub llm: Arc<FakeLlm>,
    pub store: Arc<MemoryStore>,
    pub log: Arc<RecordingLog>,
}

impl Harness {
    pub fn new(search: FakeSearch, llm: FakeLlm, store: MemoryStore) -> Self {
        Self {
            search: Arc::new(search),
            llm: Arc::new(llm),
            store: Arc::new(store),
            log: Arc::new(RecordingLog::default()),
        }
    }

    pub fn use_case(&self) -> CaptureUseCase {
        self.use_case_with_store(Some(Arc::clone(&self.store) as Arc<dyn IdeaStore>))
    }

    pub fn use_case_with_store(&self, store: Option<Arc<dyn IdeaStore>>) -> CaptureUseCase {
        CaptureUseCase::new(CaptureDeps {
            search: Arc::clone(&self.search) as Arc<dyn WebSearch>,
            llm: Arc::clone(&self.llm) as Arc<dyn LlmCompletion>,
            store,
            clock: fixed_clock(),
            log: Arc::clone(&self.log) as Arc<dyn Log>,
        })
    }

    pub fn saved(&self) -> Vec<IdeaRecord> {
        self.store.saved.lock().unwrap().clone()
    }
}
