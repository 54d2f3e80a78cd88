/// 設定檔
pub mod light_config;

pub use self::light_config::*;
