use vek::Vec2;

use crate::comp::{Point, Segment};

/// 有限長射線：從光源出發，長度等於照射半徑
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub end: Point,
}

impl Ray {
    pub fn new(origin: Point, end: Point) -> Self {
        Self { origin, end }
    }

    /// 以角度（弧度）與長度建立射線
    pub fn at_angle(origin: Point, radius: f64, angle: f64) -> Self {
        let end = origin + Vec2::new(angle.cos(), angle.sin()) * radius;
        Self { origin, end }
    }

    pub fn length(&self) -> f64 {
        self.origin.distance(self.end)
    }
}

/// 射線與邊的交點
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// 交點座標
    pub point: Point,
    /// 沿射線的絕對距離
    pub distance: f64,
}

pub struct GeometryUtils;

impl GeometryUtils {
    /// 射線與線段相交檢測
    ///
    /// 兩個參數 t（線段上）與 u（射線上）都必須嚴格落在 (0, 1) 內；
    /// 端點、角落與共線接觸一律不算相交。分母為 0（平行或退化線段）回傳 None。
    /// 不使用 epsilon，接近平行時的數值行為維持原樣。
    pub fn segment_intersection(ray: &Ray, segment: &Segment) -> Option<Intersection> {
        let (x1, y1) = (segment.start.x, segment.start.y);
        let (x2, y2) = (segment.end.x, segment.end.y);
        let (rx, ry) = (ray.origin.x, ray.origin.y);
        let (rex, rey) = (ray.end.x, ray.end.y);

        let den = (x1 - x2) * (ry - rey) - (y1 - y2) * (rx - rex);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - rx) * (ry - rey) - (y1 - ry) * (rx - rex)) / den;
        let u = -((x1 - x2) * (y1 - ry) - (y1 - y2) * (x1 - rx)) / den;

        if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
            Some(Intersection {
                point: Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)),
                distance: u * ray.length(),
            })
        } else {
            None
        }
    }

    /// 計算兩點間距離
    pub fn distance(p1: Point, p2: Point) -> f64 {
        (p1 - p2).magnitude()
    }

    /// 多邊形面積（鞋帶公式，頂點順序不影響結果）
    pub fn polygon_area(vertices: &[Point]) -> f64 {
        if vertices.len() < 3 {
            return 0.0;
        }

        let mut sum = 0.0;
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            sum += a.x * b.y - b.x * a.y;
        }
        sum.abs() * 0.5
    }
}
