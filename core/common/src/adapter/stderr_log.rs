//! 診断チャネル（stderr）向け Log 実装
//!
//! warn / error は常に出力し、info / debug は verbose 時のみ出力する。
//! fields は 1 行に収まる要点だけを付ける。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELD_SUMMARY_MAX: usize = 400;

/// stderr へ人間向けに整形して出力する Log 実装
pub struct StderrLog {
    prog: String,
    verbose: bool,
}

impl StderrLog {
    pub fn new(prog: impl Into<String>, verbose: bool) -> Self {
        Self {
            prog: prog.into(),
            verbose,
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.verbose || level <= LogLevel::Warn
    }

    /// 1 行に整形する（出力はしない）
    pub fn format_line(&self, record: &LogRecord) -> String {
        let mut line = format!("{}: {}: {}", self.prog, record.level.as_str(), record.message);
        if self.verbose {
            if let Some(ref fields) = record.fields {
                let s = serde_json::to_string(fields).unwrap_or_default();
                if s.chars().count() > FIELD_SUMMARY_MAX {
                    let truncated: String = s.chars().take(FIELD_SUMMARY_MAX).collect();
                    line.push_str(&format!(" {}... (len={})", truncated, s.len()));
                } else {
                    line.push(' ');
                    line.push_str(&s);
                }
            }
        }
        line
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if self.enabled(record.level) {
            eprintln!("{}", self.format_line(record));
        }
        Ok(())
    }
}
