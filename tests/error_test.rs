//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use visionestate::error::VisionError;
use visionestate::scanner;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(matches!(result, Err(VisionError::FolderNotFound(_))));
}

/// ファイルをフォルダとして渡した場合
#[test]
fn test_scan_file_instead_of_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("room.jpg");
    std::fs::write(&file, b"dummy").unwrap();

    let result = scanner::scan_folder(&file, false);
    assert!(matches!(result, Err(VisionError::FolderNotFound(_))));
}

/// 画像のないフォルダをスキャンした場合
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("plan.pdf"), "%PDF").unwrap();

    let result = scanner::scan_folder(dir.path(), true).unwrap();
    assert!(result.is_empty());
}

/// VisionErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        VisionError::Config("テスト設定エラー".to_string()),
        VisionError::FolderNotFound("/path/to/folder".to_string()),
        VisionError::NoImagesFound("フォルダ".to_string()),
        VisionError::Analysis(visionestate_common::Error::Status(502)),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// 共通エラーからの変換
#[test]
fn test_error_from_common() {
    let err: VisionError = visionestate_common::Error::Connection("refused".into()).into();
    assert!(matches!(err, VisionError::Analysis(_)));
    assert!(format!("{}", err).contains("refused"));
}

/// IOエラーからの変換
#[test]
fn test_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: VisionError = io.into();
    assert!(matches!(err, VisionError::Io(_)));
}
