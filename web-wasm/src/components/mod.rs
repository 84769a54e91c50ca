//! UIコンポーネント

pub mod accuracy_badge;
pub mod detection_gallery;
pub mod file_strip;
pub mod footer;
pub mod measurement_panel;
pub mod navbar;
pub mod room_view;
pub mod toaster;
pub mod upload_area;
