//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StderrLog, TeeLog};
use common::error::Error;
use common::ports::outbound::{EnvResolver, Log};

use crate::adapter::{AppConfig, DriverLlmCompletion, MongoIdeaStore, TavilySearch};
use crate::ports::outbound::IdeaStore;
use crate::usecase::{CaptureDeps, CaptureUseCase};

/// main が使う組み立て済みアプリ
pub struct App {
    pub capture: CaptureUseCase,
    pub log: Arc<dyn Log>,
}

/// stderr の診断チャネル（と、あれば JSONL ファイル）への Log を組み立てる
pub fn wire_log(verbose: bool, log_file: Option<&std::path::Path>) -> Arc<dyn Log> {
    let stderr: Arc<dyn Log> = Arc::new(StderrLog::new("idea", verbose));
    match log_file {
        Some(path) => {
            let logs: Vec<Arc<dyn Log>> = vec![stderr, Arc::new(FileJsonLog::new(path))];
            Arc::new(TeeLog::new(logs))
        }
        None => stderr,
    }
}

/// 配線: 環境変数から設定を解決し、標準アダプタで CaptureUseCase を組み立てる
pub fn wire_idea(env: &dyn EnvResolver, verbose: bool, dry_run: bool) -> Result<App, Error> {
    let config = AppConfig::resolve(env, dry_run)?;
    let log = wire_log(verbose, config.log_file.as_deref());

    let llm = Arc::new(DriverLlmCompletion::new(config.llm, Arc::clone(&log))?);
    let store: Option<Arc<dyn IdeaStore>> = config
        .store
        .map(|c| Arc::new(MongoIdeaStore::new(c, Arc::clone(&log))) as Arc<dyn IdeaStore>);

    let capture = CaptureUseCase::new(CaptureDeps {
        search: Arc::new(TavilySearch::new(config.search)),
        llm,
        store,
        clock: Arc::new(StdClock),
        log: Arc::clone(&log),
    });
    Ok(App { capture, log })
}
