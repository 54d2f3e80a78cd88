/// 光照狀態管理模塊
///
/// 負責宿主事件迴圈中的狀態：指標位置、視窗尺寸、半徑策略與每幀輸出

pub mod core;

pub use self::core::LightState;
