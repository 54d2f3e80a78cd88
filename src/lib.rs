/// Flashlight Library
///
/// 2D 手電筒光照：以光源為中心投射射線，計算被矩形遮擋後的可見多邊形

pub mod comp;
pub mod vision;
pub mod config;
pub mod scene;
pub mod state;
pub mod msg;

// Re-export commonly used types
pub use crate::comp::*;
pub use crate::vision::*;
pub use crate::msg::HostEvent;
pub use crate::state::LightState;
