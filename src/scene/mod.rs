/// 場景（靜態遮擋物）
pub mod import_scene;

pub use self::import_scene::*;
