use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::vision::Viewport;

pub const DEFAULT_SAMPLES: u32 = 360;
pub const DEFAULT_RADIUS_DIVISOR: f64 = 5.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 光照半徑的決定方式
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// 固定半徑
    Fixed { value: f64 },
    /// 由視窗尺寸推算：max(w, h) / divisor
    Viewport {
        #[serde(default = "default_divisor")]
        divisor: f64,
        /// 視窗縮放時是否重新計算
        #[serde(default)]
        follow_resize: bool,
    },
}

fn default_divisor() -> f64 {
    DEFAULT_RADIUS_DIVISOR
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        RadiusPolicy::Viewport {
            divisor: DEFAULT_RADIUS_DIVISOR,
            follow_resize: false,
        }
    }
}

impl RadiusPolicy {
    /// 依視窗尺寸算出半徑
    pub fn resolve(&self, viewport: &Viewport) -> f64 {
        match self {
            RadiusPolicy::Fixed { value } => *value,
            RadiusPolicy::Viewport { divisor, .. } => viewport.longest_side() / divisor,
        }
    }

    pub fn follows_resize(&self) -> bool {
        matches!(self, RadiusPolicy::Viewport { follow_resize: true, .. })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LightSetting {
    /// 射線數量
    pub samples: u32,
    /// 游標圓點半徑
    pub cursor_radius: f64,
    /// 亮度 (0.0-1.0)
    pub intensity: f64,
    pub radius: RadiusPolicy,
}

impl Default for LightSetting {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            cursor_radius: 20.0,
            intensity: 0.5,
            radius: RadiusPolicy::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SceneSetting {
    /// 場景檔路徑；沒有時使用內建的預設牆壁
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Setting {
    pub light: LightSetting,
    pub viewport: Viewport,
    pub scene: SceneSetting,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            light: LightSetting::default(),
            viewport: Viewport::new(1280.0, 720.0),
            scene: SceneSetting::default(),
        }
    }
}

impl Setting {
    /// 從 TOML 檔載入並驗證
    pub fn load(path: impl AsRef<Path>) -> Result<Setting, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut setting = Self::from_toml_str(&content)?;

        // 場景路徑相對於設定檔所在目錄
        if let (Some(scene), Some(dir)) = (setting.scene.path.as_ref(), path.parent()) {
            if scene.is_relative() {
                setting.scene.path = Some(dir.join(scene));
            }
        }

        log::info!("loaded config {}", path.display());
        Ok(setting)
    }

    pub fn from_toml_str(content: &str) -> Result<Setting, ConfigError> {
        let setting: Setting = toml::from_str(content)?;
        setting.validate()?;
        Ok(setting)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let light = &self.light;
        if light.samples == 0 {
            return Err(invalid("light.samples", "must be at least 1".to_string()));
        }
        if !(light.cursor_radius.is_finite() && light.cursor_radius > 0.0) {
            return Err(invalid("light.cursor_radius", format!("{} is not a positive number", light.cursor_radius)));
        }
        if !(0.0..=1.0).contains(&light.intensity) {
            return Err(invalid("light.intensity", format!("{} is outside 0.0-1.0", light.intensity)));
        }
        match light.radius {
            RadiusPolicy::Fixed { value } if !(value.is_finite() && value > 0.0) => {
                return Err(invalid("light.radius.value", format!("{} is not a positive number", value)));
            },
            RadiusPolicy::Viewport { divisor, .. } if !(divisor.is_finite() && divisor > 0.0) => {
                return Err(invalid("light.radius.divisor", format!("{} is not a positive number", divisor)));
            },
            _ => {},
        }
        let vp = &self.viewport;
        if !(vp.width.is_finite() && vp.width > 0.0 && vp.height.is_finite() && vp.height > 0.0) {
            return Err(invalid("viewport", format!("{}x{} is not a valid size", vp.width, vp.height)));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { key, reason }
}
