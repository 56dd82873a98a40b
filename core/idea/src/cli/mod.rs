//! コマンドライン解析

pub mod args;

pub use args::{parse_args, print_completion, Config, ParseOutcome};
