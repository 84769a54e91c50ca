use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("解析エラー: {0}")]
    Analysis(#[from] visionestate_common::Error),

    #[error("画像処理エラー: {0}")]
    Image(#[from] image::ImageError),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VisionError>;
