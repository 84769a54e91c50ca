//! 検出ボックス描画テスト

use image::{Rgba, RgbaImage};
use tempfile::tempdir;
use visionestate::annotate::annotate_image;
use visionestate_common::{BoxStyle, Detection};

fn detection(label: &str, bbox: [f64; 4]) -> Detection {
    Detection {
        label: label.to_string(),
        bbox,
        img_size: Some([40.0, 50.0]),
        ..Default::default()
    }
}

/// 種別ごとの色で枠が描かれ、内側は変わらない
#[test]
fn test_annotate_draws_styled_boxes() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("room.png");
    RgbaImage::new(50, 40).save(&source).unwrap();

    let mut marker = detection("A4 paper", [5.0, 5.0, 20.0, 10.0]);
    marker.is_calibration = true;
    let mut crack = detection("crack", [30.0, 20.0, 15.0, 15.0]);
    crack.is_crack = true;
    let outside = detection("ghost", [500.0, 500.0, 10.0, 10.0]);

    let out_dir = dir.path().join("annotated");
    let (path, drawn) = annotate_image(0, &source, &[marker, crack, outside], &out_dir).unwrap();

    assert_eq!(drawn, 2);
    assert_eq!(path, out_dir.join("01_room.png.annotated.png"));

    let img = image::open(&path).unwrap().to_rgba8();
    let [r, g, b] = BoxStyle::Calibration.rgb();
    assert_eq!(*img.get_pixel(5, 5), Rgba([r, g, b, 255]));
    let [r, g, b] = BoxStyle::Crack.rgb();
    assert_eq!(*img.get_pixel(30, 20), Rgba([r, g, b, 255]));

    // 枠の内側
    assert_eq!(*img.get_pixel(15, 10), Rgba([0, 0, 0, 0]));
}

/// 画像として読めないファイル
#[test]
fn test_annotate_rejects_broken_image() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("broken.jpg");
    std::fs::write(&source, b"not an image").unwrap();

    assert!(annotate_image(0, &source, &[], dir.path()).is_err());
}

/// 解析時と画像サイズが違っても、`img_size` との比で同じ位置に描く
#[test]
fn test_annotate_scales_boxes_to_file_size() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("large.png");
    RgbaImage::new(100, 80).save(&source).unwrap();

    let mut crack = detection("crack", [10.0, 10.0, 20.0, 10.0]);
    crack.is_crack = true;

    let (path, drawn) = annotate_image(0, &source, &[crack], dir.path()).unwrap();
    assert_eq!(drawn, 1);

    let img = image::open(&path).unwrap().to_rgba8();
    let [r, g, b] = BoxStyle::Crack.rgb();
    // 左20%・上25% → (20, 20)
    assert_eq!(*img.get_pixel(20, 20), Rgba([r, g, b, 255]));
    assert_eq!(*img.get_pixel(59, 39), Rgba([r, g, b, 255]));
    assert_eq!(*img.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
}

/// 別フォルダの同名ファイルは番号で区別され、上書きされない
#[test]
fn test_annotate_same_name_in_different_folders() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("annotated");
    let mut outputs = Vec::new();

    for (index, sub) in ["kitchen", "bedroom"].iter().enumerate() {
        let folder = dir.path().join(sub);
        std::fs::create_dir_all(&folder).unwrap();
        let source = folder.join("IMG_0001.png");
        RgbaImage::new(10, 10).save(&source).unwrap();

        let (path, _) = annotate_image(index, &source, &[], &out_dir).unwrap();
        outputs.push(path);
    }

    assert_eq!(outputs[0], out_dir.join("01_IMG_0001.png.annotated.png"));
    assert_eq!(outputs[1], out_dir.join("02_IMG_0001.png.annotated.png"));
    assert!(outputs.iter().all(|p| p.exists()));
}
