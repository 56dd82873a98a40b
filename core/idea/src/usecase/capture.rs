//! アイデア取り込みのユースケース（検索 → 要約 → 保存）
//!
//! 各ステップは厳密に順番に実行する。要約の解析失敗以外のエラーは即中断し、
//! それ以前のステップの結果は保存しない。

use crate::domain::{CaptureReport, IdeaRecord, IdeaText};
use crate::ports::inbound::CaptureIdea;
use crate::ports::outbound::{IdeaStore, LlmCompletion, WebSearch};
use crate::usecase::summarize::Summarizer;
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct CaptureDeps {
    pub search: Arc<dyn WebSearch>,
    pub llm: Arc<dyn LlmCompletion>,
    /// None のときは保存しない（--dry-run）
    pub store: Option<Arc<dyn IdeaStore>>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
}

/// idea のユースケース（アダプター経由で I/O を行う）
pub struct CaptureUseCase {
    search: Arc<dyn WebSearch>,
    summarizer: Summarizer,
    store: Option<Arc<dyn IdeaStore>>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl CaptureUseCase {
    pub fn new(deps: CaptureDeps) -> Self {
        Self {
            summarizer: Summarizer::new(deps.llm, Arc::clone(&deps.log)),
            search: deps.search,
            store: deps.store,
            clock: deps.clock,
            log: deps.log,
        }
    }

    fn run(&self, idea: &IdeaText) -> Result<CaptureReport, Error> {
        let related = self.search.search(idea)?;
        self.log.emit(
            LogRecord::new(LogLevel::Info, "search finished")
                .layer("usecase")
                .kind("search")
                .field("results", related.len()),
        );

        let outcome = self.summarizer.summarize(idea, &related)?;
        if outcome.is_fallback() {
            self.log.emit(
                LogRecord::new(LogLevel::Info, "summary fallback used")
                    .layer("usecase")
                    .kind("summarize"),
            );
        }

        let record = IdeaRecord::new(outcome.into_summary(), related, self.clock.now());

        let (id, unsaved) = match self.store {
            Some(ref store) => {
                let id = store.save(&record)?;
                self.log.emit(
                    LogRecord::new(LogLevel::Info, "idea saved")
                        .layer("usecase")
                        .kind("persist")
                        .field("id", id.to_string()),
                );
                (Some(id), None)
            }
            None => {
                self.log.emit(
                    LogRecord::new(LogLevel::Info, "dry run: record not saved")
                        .layer("usecase")
                        .kind("persist"),
                );
                (None, Some(record.clone()))
            }
        };

        Ok(CaptureReport {
            id,
            summary: record.summary,
            tags: record.tags,
            record: unsaved,
        })
    }
}

impl CaptureIdea for CaptureUseCase {
    fn capture(&self, idea: &IdeaText) -> Result<CaptureReport, Error> {
        self.log.emit(
            LogRecord::new(LogLevel::Info, "capture started")
                .layer("usecase")
                .kind("lifecycle")
                .field("idea_chars", idea.chars().count()),
        );
        let result = self.run(idea);
        match result {
            Ok(ref report) => self.log.emit(
                LogRecord::new(LogLevel::Info, "capture finished")
                    .layer("usecase")
                    .kind("lifecycle")
                    .field("saved", report.id.is_some()),
            ),
            Err(ref e) => self.log.emit(
                LogRecord::new(LogLevel::Debug, format!("capture failed: {}", e))
                    .layer("usecase")
                    .kind("lifecycle"),
            ),
        }
        result
    }
}
