//! 結果レポートの保存・再読み込みテスト

use tempfile::tempdir;
use visionestate::error::VisionError;
use visionestate::report::Report;
use visionestate_common::{AnalysisEntry, AnalysisResult, Detection, DisplayUnit, SpatialData};

fn sample() -> Report {
    let result = AnalysisResult {
        spatial_data: SpatialData {
            width: 4.0,
            height: 2.7,
            length: 5.0,
            area: 20.0,
        },
        is_calibrated: true,
        analysis_results: vec![AnalysisEntry::Flat(Detection {
            label: "A4 paper".into(),
            bbox: [10.0, 20.0, 30.0, 40.0],
            img_size: Some([480.0, 640.0]),
            is_calibration: true,
            image_index: Some(0),
            ..Default::default()
        })],
        ..Default::default()
    };
    Report::new(vec!["living.jpg".into()], DisplayUnit::Meter, result)
}

/// 保存したレポートを読み戻すと同じ内容・同じ表示になる
#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out").join("visionestate.json");
    let report = sample();

    report.save(&path).unwrap();
    let loaded = Report::load(&path).unwrap();

    assert_eq!(loaded, report);
    assert_eq!(loaded.summary(), report.summary());
    assert!(loaded.summary().contains("living.jpg: 1 boxes [A4 Scale Reference Verified]"));
}

/// 読み込み後に単位だけ変えて表示できる
#[test]
fn test_loaded_report_with_other_unit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("visionestate.json");
    sample().save(&path).unwrap();

    let mut loaded = Report::load(&path).unwrap();
    loaded.unit = DisplayUnit::Foot;

    let text = loaded.summary();
    assert!(text.contains("Width:  13.12 ft"));
    assert!(text.contains("Floor area: 215.17 ft²"));
}

/// 存在しないファイル・壊れたJSON
#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let missing = Report::load(&dir.path().join("none.json"));
    assert!(matches!(missing, Err(VisionError::Io(_))));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(Report::load(&broken), Err(VisionError::JsonParse(_))));
}
