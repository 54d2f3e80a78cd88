use crate::comp::{Point, Rect};
use crate::vision::geometry_utils::{GeometryUtils, Intersection, Ray};

pub struct RayCaster;

impl RayCaster {
    /// 單條射線投射
    ///
    /// 對所有遮擋物的四條邊做相交檢測，回傳距離最近的交點；
    /// 距離相同時保留先找到的那一個。沒有擋到任何東西時回傳 None。
    pub fn cast_ray(
        origin: Point,
        radius: f64,
        angle: f64,
        occluders: &[Rect],
    ) -> Option<Intersection> {
        let ray = Ray::at_angle(origin, radius, angle);
        Self::closest_hit(&ray, occluders)
    }

    /// 已建好的射線對遮擋物取最近交點
    pub fn closest_hit(ray: &Ray, occluders: &[Rect]) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;
        let mut min_distance = f64::INFINITY;

        for occluder in occluders {
            for segment in occluder.segments().iter() {
                if let Some(hit) = GeometryUtils::segment_intersection(ray, segment) {
                    if hit.distance < min_distance {
                        min_distance = hit.distance;
                        closest = Some(hit);
                    }
                }
            }
        }

        closest
    }
}
