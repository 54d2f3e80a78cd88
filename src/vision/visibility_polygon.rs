/// 可見多邊形
///
/// 把整圈等分成固定數量的取樣角度，每個角度投射一條射線，
/// 依角度遞增順序收集命中點（或未被遮擋的射線終點）
use std::f64::consts::TAU;

use crate::comp::{Point, Rect};
use crate::vision::geometry_utils::Ray;
use crate::vision::ray_caster::RayCaster;

/// 第 i 個取樣角度（弧度）
///
/// 最後一個取樣（i == samples）與第一個同為角度 0，多邊形因此首尾完全重合。
pub fn sample_angle(index: u32, samples: u32) -> f64 {
    if index == 0 || index == samples {
        0.0
    } else {
        index as f64 * (TAU / samples as f64)
    }
}

/// 計算可見多邊形
///
/// 回傳 `samples + 1` 個頂點，可直接以光源為中心做扇形三角化填色。
/// 每次呼叫都重新計算，不做任何緩存。
pub fn compute_visibility_polygon(
    origin: Point,
    radius: f64,
    samples: u32,
    occluders: &[Rect],
) -> Vec<Point> {
    let mut points = Vec::with_capacity(samples as usize + 1);
    let mut hits = 0usize;

    for i in 0..=samples {
        let ray = Ray::at_angle(origin, radius, sample_angle(i, samples));
        match RayCaster::closest_hit(&ray, occluders) {
            Some(hit) => {
                hits += 1;
                points.push(hit.point);
            },
            None => points.push(ray.end),
        }
    }

    log::debug!(
        "visibility polygon at ({:.1}, {:.1}) r={:.1}: {} rays, {} blocked, {} occluders",
        origin.x, origin.y, radius, samples + 1, hits, occluders.len()
    );

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_angles_increase_and_wrap() {
        let samples = 8;
        let angles: Vec<f64> = (0..=samples).map(|i| sample_angle(i, samples)).collect();

        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[8], 0.0);
        for pair in angles[..8].windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!((angles[4] - std::f64::consts::PI).abs() < 1e-12);
    }
}
