/// 光照輸出
///
/// 每一幀交給渲染端的資料：可見多邊形、遮擋物、游標圓點
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::comp::{LightSource, Point, Rect};
use crate::vision::geometry_utils::GeometryUtils;

/// 游標圓點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorMarker {
    pub center: Point,
    pub radius: f64,
}

/// 視窗尺寸
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// 一幀的光照輸出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightFrame {
    /// 光源（位置、半徑、亮度）
    pub light: LightSource,
    /// 可見多邊形頂點，依角度遞增
    pub polygon: Vec<Point>,
    /// 遮擋物（原樣交給渲染端）
    pub occluders: Vec<Rect>,
    /// 游標圓點
    pub cursor: CursorMarker,
    /// 視窗尺寸
    pub viewport: Viewport,
}

impl LightFrame {
    /// 扇形三角化：(光源, p[i], p[i+1])
    pub fn fan_triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        let origin = self.light.origin;
        self.polygon
            .windows(2)
            .map(move |pair| [origin, pair[0], pair[1]])
    }

    /// SVG 路徑字串（M x y L x y ... Z）
    pub fn svg_path(&self) -> String {
        let mut path = String::with_capacity(self.polygon.len() * 16);
        for (i, p) in self.polygon.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(path, "{}{:.2} {:.2} ", cmd, p.x, p.y);
        }
        if !self.polygon.is_empty() {
            path.push('Z');
        }
        path
    }

    /// 受光面積
    pub fn lit_area(&self) -> f64 {
        GeometryUtils::polygon_area(&self.polygon)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
