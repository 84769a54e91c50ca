//! VisionEstate Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod error;
pub mod overlay;
pub mod session;
pub mod showcase;
pub mod types;
pub mod units;
pub mod wireframe;

pub use error::{Error, Result};
pub use overlay::{overlays_for, BoxStyle, Overlay, OverlayRect};
pub use session::{
    is_image_mime, notification_for, run_analysis, AnalysisSession, CompletedAnalysis,
    Notification, NotificationLevel, ReconstructionClient, UploadedFile,
};
pub use types::{AnalysisEntry, AnalysisResult, Detection, ImageDetections, SpatialData};
pub use units::{format_length, DisplayUnit, MeasurementSummary};
pub use wireframe::{project_room, Camera, RoomProjection};

/// マルチパートのフィールド名（全画像で共通）
pub const UPLOAD_FIELD: &str = "files";

/// 解析サービスの既定エンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/reconstruct-room";
