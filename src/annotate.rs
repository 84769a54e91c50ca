//! 検出ボックスを画像に描き込む

use crate::error::Result;
use image::Rgba;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};
use visionestate_common::{BoxStyle, Detection, OverlayRect};

/// 枠線の太さ（px）
const STROKE: u32 = 3;

/// 検出の座標を読み込んだ画像のピクセル座標に直す
///
/// `img_size` が有効なら解析時の画像サイズとの比で拡大縮小する。
/// 無い場合は `bbox` をそのまま使う。
fn to_image_space(det: &Detection, width: u32, height: u32) -> [f64; 4] {
    match det.img_size.and_then(|size| OverlayRect::from_bbox(det.bbox, size)) {
        Some(rect) => {
            let (w, h) = (width as f64 / 100.0, height as f64 / 100.0);
            [rect.left * w, rect.top * h, rect.width * w, rect.height * h]
        }
        None => det.bbox,
    }
}

/// `[x, y, w, h]` を画像内に収まる整数矩形にする（収まらなければ `None`）
fn clamp_rect(bbox: [f64; 4], width: u32, height: u32) -> Option<Rect> {
    let [x, y, w, h] = bbox;
    if ![x, y, w, h].iter().all(|v| v.is_finite()) {
        return None;
    }
    let left = x.max(0.0).min(width as f64);
    let top = y.max(0.0).min(height as f64);
    let right = (x + w).max(0.0).min(width as f64);
    let bottom = (y + h).max(0.0).min(height as f64);

    let rw = (right - left).round() as u32;
    let rh = (bottom - top).round() as u32;
    if rw == 0 || rh == 0 {
        return None;
    }
    Some(Rect::at(left.round() as i32, top.round() as i32).of_size(rw, rh))
}

/// 出力ファイル名。送信順の番号を付けて同名ファイルの上書きを避ける
fn output_name(index: usize, source: &Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".into());
    format!("{:02}_{}.annotated.png", index + 1, name)
}

/// 画像を読み込み、検出ボックスを描いたPNGを `out_dir` に書き出す
///
/// 出力は `<番号>_<元のファイル名>.annotated.png`（番号は `index + 1`）。
/// 描いた枠の数も返す。
pub fn annotate_image(
    index: usize,
    source: &Path,
    detections: &[Detection],
    out_dir: &Path,
) -> Result<(PathBuf, usize)> {
    let mut img = image::open(source)?.to_rgba8();
    let (width, height) = img.dimensions();
    let mut drawn = 0;

    for det in detections {
        let bbox = to_image_space(det, width, height);
        let Some(rect) = clamp_rect(bbox, width, height) else {
            tracing::debug!(label = %det.label, "box outside image, skipped");
            continue;
        };
        let [r, g, b] = BoxStyle::of(det).rgb();
        let color = Rgba([r, g, b, 255]);

        // 内側に向かって枠を重ねて太くする
        for i in 0..STROKE {
            if rect.width() <= 2 * i || rect.height() <= 2 * i {
                break;
            }
            let inner = Rect::at(rect.left() + i as i32, rect.top() + i as i32)
                .of_size(rect.width() - 2 * i, rect.height() - 2 * i);
            draw_hollow_rect_mut(&mut img, inner, color);
        }
        drawn += 1;
    }

    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(output_name(index, source));
    img.save(&out_path)?;

    Ok((out_path, drawn))
}
