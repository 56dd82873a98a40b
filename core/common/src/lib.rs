//! idea 共通ライブラリ
//!
//! `idea` コマンドとテストで共有される機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;
