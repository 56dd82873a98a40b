//! 単発 LLM 完了の標準実装（common の LlmDriver に委譲する）

use crate::adapter::config::LlmConfig;
use crate::ports::outbound::LlmCompletion;
use common::error::Error;
use common::llm::{create_driver, AnyProvider, LlmDriver, LlmProvider};
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 標準の単発完了アダプタ
pub struct DriverLlmCompletion {
    driver: LlmDriver<AnyProvider>,
    log: Arc<dyn Log>,
}

impl DriverLlmCompletion {
    pub fn new(config: LlmConfig, log: Arc<dyn Log>) -> Result<Self, Error> {
        let driver = create_driver(config.provider, config.model, config.api_key)?;
        Ok(Self { driver, log })
    }
}

impl LlmCompletion for DriverLlmCompletion {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        let text = self.driver.query(prompt)?;
        self.log.emit(
            LogRecord::new(LogLevel::Debug, "model responded")
                .layer("adapter")
                .kind("llm")
                .field("provider", self.driver.provider().name())
                .field("chars", text.chars().count()),
        );
        Ok(text)
    }
}
