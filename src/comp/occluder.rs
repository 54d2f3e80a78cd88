/// 遮擋物模型
///
/// 軸對齊矩形遮擋物，以及由它拆出的四條邊
use serde::{Deserialize, Serialize};
use vek::Vec2;

/// 平面上的點
pub type Point = Vec2<f64>;

/// 線段（起點 -> 終點）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// 線段長度
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// 矩形遮擋物
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// 拆成四條邊：上、右、下、左（螢幕座標下順時針）
    pub fn segments(&self) -> [Segment; 4] {
        let Rect { x, y, width: w, height: h } = *self;
        [
            Segment::new(Vec2::new(x, y), Vec2::new(x + w, y)),
            Segment::new(Vec2::new(x + w, y), Vec2::new(x + w, y + h)),
            Segment::new(Vec2::new(x + w, y + h), Vec2::new(x, y + h)),
            Segment::new(Vec2::new(x, y + h), Vec2::new(x, y)),
        ]
    }

    /// 檢查點是否在矩形內（含邊界）
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.x + self.width &&
        point.y >= self.y && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}
