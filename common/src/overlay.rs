//! 検出ボックスのオーバーレイ座標計算
//!
//! ピクセル座標のボックスを画像サイズに対する百分率へ変換する。
//! 表示側でどれだけ拡大縮小されても、百分率で配置すれば画像に重なる。

use crate::types::Detection;

/// ボックスの表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    Generic,
    Calibration,
    Crack,
}

impl BoxStyle {
    /// 校正マーカー > ひび割れ > 一般 の順で決定する
    pub fn of(detection: &Detection) -> Self {
        if detection.is_calibration {
            BoxStyle::Calibration
        } else if detection.is_crack {
            BoxStyle::Crack
        } else {
            BoxStyle::Generic
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BoxStyle::Generic => "border-blue-500 bg-blue-500/10",
            BoxStyle::Calibration => "border-yellow-400 bg-yellow-400/30",
            BoxStyle::Crack => "border-red-500 bg-red-500/20",
        }
    }

    /// 画像への書き込み用の色
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            BoxStyle::Generic => [59, 130, 246],
            BoxStyle::Calibration => [250, 204, 21],
            BoxStyle::Crack => [239, 68, 68],
        }
    }
}

/// 百分率で表した矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayRect {
    /// `bbox` = `[x, y, w, h]`、`img_size` = `[height, width]`（いずれもピクセル）
    ///
    /// 画像サイズが正の有限値でない場合は配置できないので `None`。
    pub fn from_bbox(bbox: [f64; 4], img_size: [f64; 2]) -> Option<Self> {
        let [img_h, img_w] = img_size;
        if !(img_w.is_finite() && img_h.is_finite()) || img_w <= 0.0 || img_h <= 0.0 {
            return None;
        }

        let [x, y, w, h] = bbox;
        Some(Self {
            left: x / img_w * 100.0,
            top: y / img_h * 100.0,
            width: w / img_w * 100.0,
            height: h / img_h * 100.0,
        })
    }

    pub fn to_style(&self) -> String {
        format!(
            "left: {:.4}%; top: {:.4}%; width: {:.4}%; height: {:.4}%",
            self.left, self.top, self.width, self.height
        )
    }
}

/// 描画単位のオーバーレイ
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub label: String,
    pub style: BoxStyle,
    pub rect: OverlayRect,
}

/// 配置可能な検出ボックスだけをオーバーレイに変換
pub fn overlays_for(detections: &[Detection]) -> Vec<Overlay> {
    detections
        .iter()
        .filter_map(|det| {
            let Some(img_size) = det.img_size else {
                tracing::debug!(label = %det.label, "img_size missing, overlay skipped");
                return None;
            };
            OverlayRect::from_bbox(det.bbox, img_size).map(|rect| Overlay {
                label: det.label.clone(),
                style: BoxStyle::of(det),
                rect,
            })
        })
        .collect()
}
