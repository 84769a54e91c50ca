use crate::error::{Result, VisionError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
}

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

/// 拡張子からMIMEタイプを引く（大文字小文字は区別しない）
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// フォルダ内の画像を列挙する（`recursive` でサブフォルダも対象）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(VisionError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(mime_type) = mime_for(path) else {
            tracing::trace!(path = %path.display(), "not an image, skipped");
            continue;
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        images.push(ImageInfo {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        });
    }

    // ファイル名でソート（同名はパスで）
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name).then_with(|| a.path.cmp(&b.path)));

    tracing::debug!(folder = %folder.display(), count = images.len(), "scan finished");
    Ok(images)
}
