//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される `/reconstruct-room` レスポンスの型:
//! - SpatialData: 部屋寸法（メートル）
//! - Detection: 検出ボックス1件
//! - ImageDetections: 画像単位にまとめられた検出結果
//! - AnalysisResult: レスポンス全体

use serde::{Deserialize, Serialize};

/// 部屋寸法（すべてメートル単位、サービスの推定値をそのまま保持）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialData {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub area: f64,
}

/// 検出ボックス
///
/// `bbox` は `[x, y, w, h]`（ピクセル）、`img_size` は `[height, width]`（ピクセル）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,

    pub bbox: [f64; 4],

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_size: Option<[f64; 2]>,

    #[serde(default, rename = "isCalibration")]
    pub is_calibration: bool,

    #[serde(default, rename = "isCrack")]
    pub is_crack: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// 画像の並び順（フラット形式のレスポンスでのみ使用）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_index: Option<usize>,
}

/// 画像1枚分の検出結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDetections {
    pub detections: Vec<Detection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_size: Option<[f64; 2]>,
}

/// `analysis_results` の要素
///
/// 画像単位のグループ形式と、検出ボックスを並べただけのフラット形式の両方を受け付ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisEntry {
    Grouped(ImageDetections),
    Flat(Detection),
}

/// `/reconstruct-room` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    pub spatial_data: SpatialData,

    #[serde(default)]
    pub is_calibrated: bool,

    #[serde(default)]
    pub analysis_results: Vec<AnalysisEntry>,
}

impl AnalysisResult {
    /// `index` 番目の画像に描画する検出ボックスを返す
    ///
    /// グループ形式は位置で対応付け、`img_size` が欠けている検出にはグループの値を補う。
    /// フラット形式は `image_index` で対応付け、インデックスが無い検出は
    /// 画像が1枚だけのときに限りその画像へ割り当てる。
    pub fn detections_for_image(&self, index: usize, image_count: usize) -> Vec<Detection> {
        let mut out = Vec::new();
        let mut flat_position = 0usize;

        for entry in &self.analysis_results {
            match entry {
                AnalysisEntry::Grouped(group) => {
                    if flat_position == index {
                        out.extend(group.detections.iter().map(|d| {
                            let mut d = d.clone();
                            if d.img_size.is_none() {
                                d.img_size = group.img_size;
                            }
                            d
                        }));
                    }
                    flat_position += 1;
                }
                AnalysisEntry::Flat(det) => {
                    let belongs = match det.image_index {
                        Some(i) => i == index,
                        None => image_count == 1 && index == 0,
                    };
                    if belongs {
                        out.push(det.clone());
                    }
                }
            }
        }

        out
    }

    /// `index` 番目の画像に校正用マーカー（A4用紙など）が写っているか
    pub fn has_calibration_marker(&self, index: usize, image_count: usize) -> bool {
        self.detections_for_image(index, image_count)
            .iter()
            .any(|d| d.is_calibration)
    }

    /// すべての検出ボックス（画像への割り当てとは無関係）
    pub fn all_detections(&self) -> impl Iterator<Item = &Detection> {
        self.analysis_results.iter().flat_map(|entry| match entry {
            AnalysisEntry::Grouped(group) => group.detections.iter().collect::<Vec<_>>(),
            AnalysisEntry::Flat(det) => vec![det],
        })
    }

    pub fn detection_count(&self) -> usize {
        self.all_detections().count()
    }

    pub fn crack_count(&self) -> usize {
        self.all_detections().filter(|d| d.is_crack).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(label: &str, index: Option<usize>) -> AnalysisEntry {
        AnalysisEntry::Flat(Detection {
            label: label.to_string(),
            bbox: [0.0, 0.0, 10.0, 10.0],
            img_size: Some([100.0, 100.0]),
            image_index: index,
            ..Default::default()
        })
    }

    #[test]
    fn test_deserialize_flat_response() {
        let json = r#"{
            "status": "Verified",
            "spatial_data": {"width": 4.2, "height": 2.7, "length": 5.1, "area": 21.42},
            "is_calibrated": true,
            "analysis_results": [
                {"label": "A4 Sheet", "bbox": [10, 20, 30, 40], "img_size": [480, 640], "isCalibration": true},
                {"label": "Structural Crack", "bbox": [100.5, 50, 20, 80], "img_size": [480, 640], "isCrack": true, "confidence": 0.42}
            ]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.status.as_deref(), Some("Verified"));
        assert!(result.is_calibrated);
        assert_eq!(result.spatial_data.area, 21.42);
        assert_eq!(result.analysis_results.len(), 2);

        match &result.analysis_results[1] {
            AnalysisEntry::Flat(det) => {
                assert_eq!(det.label, "Structural Crack");
                assert_eq!(det.bbox, [100.5, 50.0, 20.0, 80.0]);
                assert!(det.is_crack);
                assert!(!det.is_calibration);
                assert_eq!(det.confidence, Some(0.42));
            }
            other => panic!("フラット形式になるはず: {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_grouped_response() {
        let json = r#"{
            "spatial_data": {"width": 3, "height": 2.5, "length": 4, "area": 12},
            "analysis_results": [
                {"img_size": [1080, 1920], "detections": [{"label": "chair", "bbox": [1, 2, 3, 4]}]},
                {"detections": []}
            ]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!result.is_calibrated);
        assert!(matches!(result.analysis_results[0], AnalysisEntry::Grouped(_)));

        let first = result.detections_for_image(0, 2);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].img_size, Some([1080.0, 1920.0]));
        assert!(result.detections_for_image(1, 2).is_empty());
        assert!(result.detections_for_image(2, 2).is_empty());
    }

    #[test]
    fn test_missing_spatial_fields_default_to_zero() {
        let json = r#"{"spatial_data": {"width": 2.0}}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.spatial_data.width, 2.0);
        assert_eq!(result.spatial_data.area, 0.0);
        assert!(result.analysis_results.is_empty());
    }

    #[test]
    fn test_missing_spatial_data_is_an_error() {
        let json = r#"{"analysis_results": []}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_flat_detections_follow_image_index() {
        let result = AnalysisResult {
            analysis_results: vec![flat("a", Some(0)), flat("b", Some(1)), flat("c", Some(1))],
            ..Default::default()
        };

        assert_eq!(result.detections_for_image(0, 2).len(), 1);
        let second: Vec<_> = result
            .detections_for_image(1, 2)
            .into_iter()
            .map(|d| d.label)
            .collect();
        assert_eq!(second, vec!["b", "c"]);
    }

    #[test]
    fn test_unindexed_flat_detections_only_for_single_image() {
        let result = AnalysisResult {
            analysis_results: vec![flat("door", None)],
            ..Default::default()
        };

        assert_eq!(result.detections_for_image(0, 1).len(), 1);
        assert!(result.detections_for_image(0, 3).is_empty());
        assert_eq!(result.detection_count(), 1);
    }

    #[test]
    fn test_calibration_marker_and_counts() {
        let mut marker = Detection {
            label: "A4".to_string(),
            is_calibration: true,
            image_index: Some(1),
            ..Default::default()
        };
        marker.img_size = Some([10.0, 10.0]);
        let crack = Detection {
            label: "Structural Crack".to_string(),
            is_crack: true,
            image_index: Some(0),
            ..Default::default()
        };

        let result = AnalysisResult {
            analysis_results: vec![AnalysisEntry::Flat(marker), AnalysisEntry::Flat(crack)],
            ..Default::default()
        };

        assert!(!result.has_calibration_marker(0, 2));
        assert!(result.has_calibration_marker(1, 2));
        assert_eq!(result.detection_count(), 2);
        assert_eq!(result.crack_count(), 1);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let det = Detection {
            label: "crack".to_string(),
            is_crack: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&det).expect("シリアライズ失敗");
        assert!(json.contains("\"isCrack\":true"));
        assert!(json.contains("\"isCalibration\":false"));
        assert!(!json.contains("image_index"));
    }
}
