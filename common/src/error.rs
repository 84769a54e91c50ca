//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("no images uploaded")]
    NoFiles,

    #[error("analysis already in progress")]
    Busy,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("failed to prepare upload: {0}")]
    Upload(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 送信前にローカルで弾いたエラーか（通信は発生していない）
    pub fn is_local(&self) -> bool {
        matches!(self, Error::NoFiles | Error::Busy)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
