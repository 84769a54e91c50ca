//! 解析結果の表示と保存

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use visionestate_common::{AnalysisResult, DisplayUnit, MeasurementSummary};

/// 保存するレポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// RFC 3339
    pub analyzed_at: String,
    pub unit: DisplayUnit,
    /// 送信順のファイル名
    pub images: Vec<String>,
    pub result: AnalysisResult,
}

impl Report {
    pub fn new(images: Vec<String>, unit: DisplayUnit, result: AnalysisResult) -> Self {
        Self {
            analyzed_at: chrono::Local::now().to_rfc3339(),
            unit,
            images,
            result,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 端末表示用のテキスト
    pub fn summary(&self) -> String {
        let result = &self.result;
        let m = MeasurementSummary::new(&result.spatial_data, self.unit);
        let count = self.images.len();
        let mut out = String::new();

        let mode = if result.is_calibrated {
            "A4 Calibrated"
        } else {
            "Estimated Mode"
        };
        let _ = writeln!(out, "Scale: {}", mode);
        let _ = writeln!(out, "  Width:  {}", m.width);
        let _ = writeln!(out, "  Height: {}", m.height);
        let _ = writeln!(out, "  Length: {}", m.length);
        let _ = writeln!(out, "  Floor area: {}", m.area);
        let _ = writeln!(
            out,
            "Detections: {} ({} cracks)",
            result.detection_count(),
            result.crack_count()
        );

        for (index, name) in self.images.iter().enumerate() {
            let detections = result.detections_for_image(index, count);
            let marker = if result.has_calibration_marker(index, count) {
                " [A4 Scale Reference Verified]"
            } else {
                ""
            };
            let _ = writeln!(out, "  {}: {} boxes{}", name, detections.len(), marker);
            for det in &detections {
                let _ = writeln!(out, "    - {}", det.label);
            }
        }
        out
    }
}
