//! VisionEstate CLI
//!
//! 部屋写真のフォルダを解析サービスに送り、寸法・検出結果を表示・保存する。

pub mod annotate;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
