/// 光照可見性模組
///
/// 包含射線相交、單射線投射、可見多邊形與輸出格式
pub mod geometry_utils;
pub mod ray_caster;
pub mod visibility_polygon;
pub mod vision_output;

pub use self::{
    geometry_utils::{GeometryUtils, Intersection, Ray},
    ray_caster::RayCaster,
    visibility_polygon::{compute_visibility_polygon, sample_angle},
    vision_output::*,
};
