//! ユースケース層（ports 経由でのみ外界に触れる）

pub mod capture;
pub mod summarize;

pub use capture::{CaptureDeps, CaptureUseCase};
