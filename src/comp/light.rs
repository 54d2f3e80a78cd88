/// 光源
///
/// 跟隨指標移動的點光源；位置由呼叫端每次傳入，不存成全域狀態
use serde::{Deserialize, Serialize};
use vek::Vec2;

use super::occluder::{Point, Rect};
use crate::vision::compute_visibility_polygon;

/// 點光源
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    /// 光源位置
    pub origin: Point,
    /// 照射半徑
    pub radius: f64,
    /// 亮度（交給渲染端使用）
    pub intensity: f64,
}

impl LightSource {
    pub fn new(origin: Point, radius: f64) -> Self {
        Self {
            origin,
            radius,
            intensity: 0.5,
        }
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// 移動光源
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.origin = Vec2::new(x, y);
    }

    /// 計算此光源的可見多邊形
    pub fn visibility(&self, samples: u32, occluders: &[Rect]) -> Vec<Point> {
        compute_visibility_polygon(self.origin, self.radius, samples, occluders)
    }

    /// 檢查點是否落在照射半徑內
    pub fn reaches(&self, point: Point) -> bool {
        self.origin.distance(point) <= self.radius
    }
}
