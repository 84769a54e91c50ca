//! 設定ファイルの読み書きテスト

use tempfile::tempdir;
use visionestate::config::Config;
use visionestate_common::DisplayUnit;

/// 設定ファイルが無ければ既定値
#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

/// 保存→読み込みで同じ値に戻る
#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://rooms.example.test/reconstruct-room").unwrap();
    config.default_unit = DisplayUnit::Inch;
    config.timeout_seconds = Some(90);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// 壊れたJSONはエラー
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ endpoint: ").unwrap();

    assert!(Config::load_from(&path).is_err());
}
