//! 部屋ワイヤーフレームの投影
//!
//! 部屋を幅×高さ×奥行きの直方体とみなし、正射影で2D線分に落とす。
//! Web版ではSVG、CLIでは利用しない。

use crate::types::SpatialData;

/// 視点（度数法）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw_deg: 45.0,
            pitch_deg: 30.0,
        }
    }
}

impl Camera {
    /// 水平方向に回す。yawは [0, 360) に正規化される
    pub fn orbit(self, delta_deg: f64) -> Self {
        Self {
            yaw_deg: (self.yaw_deg + delta_deg).rem_euclid(360.0),
            ..self
        }
    }

    fn project(&self, [x, y, z]: [f64; 3]) -> (f64, f64) {
        let (sy, cy) = self.yaw_deg.to_radians().sin_cos();
        let (sp, cp) = self.pitch_deg.to_radians().sin_cos();
        let rx = x * cy - z * sy;
        let rz = x * sy + z * cy;
        // 画面のY軸は下向き
        (rx, -y * cp + rz * sp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub floor: bool,
}

/// 投影結果（ビューポート座標）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomProjection {
    pub edges: Vec<Segment>,
    pub floor: Vec<Point>,
}

impl RoomProjection {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// SVG `points` 属性用の床ポリゴン
    pub fn floor_points(&self) -> String {
        self.floor
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// 床4点 → 天井4点
#[rustfmt::skip]
const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// 部屋の直方体を `viewport` (幅, 高さ) に収まるよう投影する
///
/// 寸法が全て0、または有限値でない場合は空の投影を返す。
pub fn project_room(
    spatial: &SpatialData,
    camera: &Camera,
    viewport: (f64, f64),
    padding: f64,
) -> RoomProjection {
    let dims = [spatial.width, spatial.height, spatial.length];
    if dims.iter().any(|d| !d.is_finite() || *d < 0.0) || dims.iter().all(|d| *d == 0.0) {
        return RoomProjection::default();
    }

    let (hw, h, hl) = (spatial.width / 2.0, spatial.height, spatial.length / 2.0);
    let corners = [
        [-hw, 0.0, -hl],
        [hw, 0.0, -hl],
        [hw, 0.0, hl],
        [-hw, 0.0, hl],
        [-hw, h, -hl],
        [hw, h, -hl],
        [hw, h, hl],
        [-hw, h, hl],
    ];
    let projected: Vec<(f64, f64)> = corners.iter().map(|c| camera.project(*c)).collect();

    let (min_x, max_x, min_y, max_y) = projected.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(a, b, c, d), &(x, y)| (a.min(x), b.max(x), c.min(y), d.max(y)),
    );
    let (span_x, span_y) = (max_x - min_x, max_y - min_y);

    let avail_w = (viewport.0 - 2.0 * padding).max(0.0);
    let avail_h = (viewport.1 - 2.0 * padding).max(0.0);
    let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
        (true, true) => (avail_w / span_x).min(avail_h / span_y),
        (true, false) => avail_w / span_x,
        (false, true) => avail_h / span_y,
        (false, false) => return RoomProjection::default(),
    };

    let offset_x = (viewport.0 - span_x * scale) / 2.0;
    let offset_y = (viewport.1 - span_y * scale) / 2.0;
    let to_view = |(x, y): (f64, f64)| Point {
        x: offset_x + (x - min_x) * scale,
        y: offset_y + (y - min_y) * scale,
    };
    let points: Vec<Point> = projected.into_iter().map(to_view).collect();

    RoomProjection {
        edges: EDGES
            .iter()
            .map(|&(a, b)| Segment {
                from: points[a],
                to: points[b],
                floor: a < 4 && b < 4,
            })
            .collect(),
        floor: points[..4].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(width: f64, height: f64, length: f64) -> SpatialData {
        SpatialData {
            width,
            height,
            length,
            area: width * length,
        }
    }

    #[test]
    fn test_projection_has_twelve_edges() {
        let p = project_room(&room(4.0, 2.7, 5.0), &Camera::default(), (400.0, 300.0), 20.0);
        assert_eq!(p.edges.len(), 12);
        assert_eq!(p.edges.iter().filter(|e| e.floor).count(), 4);
        assert_eq!(p.floor.len(), 4);
    }

    #[test]
    fn test_projection_fits_viewport() {
        let viewport = (400.0, 300.0);
        let padding = 20.0;
        for yaw in [0.0, 30.0, 45.0, 135.0, 270.0] {
            let camera = Camera { yaw_deg: yaw, pitch_deg: 30.0 };
            let p = project_room(&room(6.0, 2.4, 3.0), &camera, viewport, padding);
            for e in &p.edges {
                for pt in [e.from, e.to] {
                    assert!(pt.x >= padding - 1e-6 && pt.x <= viewport.0 - padding + 1e-6);
                    assert!(pt.y >= padding - 1e-6 && pt.y <= viewport.1 - padding + 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_ceiling_is_drawn_above_floor() {
        let p = project_room(&room(4.0, 2.7, 5.0), &Camera::default(), (400.0, 300.0), 10.0);
        // 0番の床の角と4番の天井の角は同じ柱
        let pillar = p.edges.iter().find(|e| !e.floor && e.from == p.floor[0]).unwrap();
        assert!(pillar.to.y < pillar.from.y);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let camera = Camera::default();
        assert!(project_room(&room(0.0, 0.0, 0.0), &camera, (100.0, 100.0), 5.0).is_empty());
        assert!(project_room(&room(f64::NAN, 1.0, 1.0), &camera, (100.0, 100.0), 5.0).is_empty());
        assert!(project_room(&room(-1.0, 1.0, 1.0), &camera, (100.0, 100.0), 5.0).is_empty());
        // 高さ0でも床だけは描ける
        assert!(!project_room(&room(3.0, 0.0, 3.0), &camera, (100.0, 100.0), 5.0).is_empty());
    }

    #[test]
    fn test_orbit_wraps() {
        let camera = Camera::default().orbit(330.0);
        assert!((camera.yaw_deg - 15.0).abs() < 1e-9);
        let camera = Camera::default().orbit(-90.0);
        assert!((camera.yaw_deg - 315.0).abs() < 1e-9);
        assert_eq!(camera.pitch_deg, 30.0);
    }

    #[test]
    fn test_floor_points_format() {
        let p = RoomProjection {
            edges: vec![],
            floor: vec![Point { x: 1.0, y: 2.5 }, Point { x: 3.333, y: 4.0 }],
        };
        assert_eq!(p.floor_points(), "1.00,2.50 3.33,4.00");
    }
}
