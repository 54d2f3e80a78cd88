pub mod occluder;
pub mod light;

pub use self::{
    occluder::*,
    light::*,
};
