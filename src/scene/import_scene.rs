/// 場景檔匯入
///
/// 支援 TOML / YAML / JSON，讀入後依視窗尺寸解析座標並驗證
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::comp::Rect;
use crate::vision::Viewport;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("cannot read scene {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported scene format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("cannot parse TOML scene: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cannot parse YAML scene: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("cannot parse JSON scene: {0}")]
    Json(#[from] serde_json::Error),
    #[error("occluder #{index} is invalid: {reason}")]
    InvalidOccluder { index: usize, reason: String },
}

/// 座標基準點
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// (x, y) 就是矩形左上角
    #[default]
    TopLeft,
    /// (x, y) 是相對於視窗中心的位移
    ViewportCenter,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OccluderJD {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub anchor: Anchor,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SceneData {
    #[serde(default)]
    pub occluders: Vec<OccluderJD>,
}

impl SceneData {
    /// 從文件載入，依副檔名決定格式
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<SceneData, SceneError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(SceneError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<SceneData, SceneError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<SceneData, SceneError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<SceneData, SceneError> {
        Ok(serde_json::from_str(content)?)
    }

    /// 解析成實際座標並驗證
    pub fn resolve(&self, viewport: &Viewport) -> Result<Scene, SceneError> {
        let occluders = self.occluders
            .iter()
            .map(|o| match o.anchor {
                Anchor::TopLeft => Rect::new(o.x, o.y, o.width, o.height),
                Anchor::ViewportCenter => Rect::new(
                    viewport.width / 2.0 + o.x,
                    viewport.height / 2.0 + o.y,
                    o.width,
                    o.height,
                ),
            })
            .collect();
        Scene::new(occluders)
    }
}

/// 已驗證的靜態遮擋物集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    occluders: Vec<Rect>,
}

impl Scene {
    pub fn new(occluders: Vec<Rect>) -> Result<Scene, SceneError> {
        for (index, rect) in occluders.iter().enumerate() {
            validate_occluder(index, rect)?;
        }
        Ok(Scene { occluders })
    }

    /// 內建場景：四面牆，第一面在視窗正中央
    pub fn default_for_viewport(viewport: &Viewport) -> Scene {
        Scene {
            occluders: vec![
                Rect::new(viewport.width / 2.0, viewport.height / 2.0, 60.0, 60.0),
                Rect::new(250.0, 500.0, 60.0, 120.0),
                Rect::new(600.0, 300.0, 60.0, 60.0),
                Rect::new(700.0, 400.0, 60.0, 60.0),
            ],
        }
    }

    /// 從場景檔載入
    pub fn load(path: impl AsRef<Path>, viewport: &Viewport) -> Result<Scene, SceneError> {
        let path = path.as_ref();
        let scene = SceneData::load_from_file(path)?.resolve(viewport)?;
        log::info!("loaded {} occluders from {}", scene.len(), path.display());
        Ok(scene)
    }

    pub fn occluders(&self) -> &[Rect] {
        &self.occluders
    }

    pub fn len(&self) -> usize {
        self.occluders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occluders.is_empty()
    }
}

fn validate_occluder(index: usize, rect: &Rect) -> Result<(), SceneError> {
    let reason = if !(rect.x.is_finite() && rect.y.is_finite()) {
        Some(format!("position ({}, {}) is not finite", rect.x, rect.y))
    } else if !(rect.width.is_finite() && rect.width > 0.0) {
        Some(format!("width {} must be positive", rect.width))
    } else if !(rect.height.is_finite() && rect.height > 0.0) {
        Some(format!("height {} must be positive", rect.height))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SceneError::InvalidOccluder { index, reason }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_SCENE: &str = r#"
        [[occluders]]
        x = 0.0
        y = 0.0
        width = 60.0
        height = 60.0
        anchor = "viewport_center"

        [[occluders]]
        x = 250.0
        y = 500.0
        width = 60.0
        height = 120.0
    "#;

    #[test]
    fn test_toml_scene_with_center_anchor() {
        let data = SceneData::from_toml_str(TOML_SCENE).unwrap();
        assert_eq!(data.occluders.len(), 2);
        assert_eq!(data.occluders[0].anchor, Anchor::ViewportCenter);
        assert_eq!(data.occluders[1].anchor, Anchor::TopLeft);

        let scene = data.resolve(&Viewport::new(800.0, 600.0)).unwrap();
        assert_eq!(scene.occluders()[0], Rect::new(400.0, 300.0, 60.0, 60.0));
        assert_eq!(scene.occluders()[1], Rect::new(250.0, 500.0, 60.0, 120.0));
    }

    #[test]
    fn test_yaml_and_json_scenes() {
        let yaml = "occluders:\n  - { x: 1.0, y: 2.0, width: 3.0, height: 4.0 }\n";
        let json = r#"{"occluders":[{"x":1.0,"y":2.0,"width":3.0,"height":4.0}]}"#;

        let a = SceneData::from_yaml_str(yaml).unwrap();
        let b = SceneData::from_json_str(json).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_scene_matches_demo_walls() {
        let scene = Scene::default_for_viewport(&Viewport::new(1024.0, 768.0));
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.occluders()[0], Rect::new(512.0, 384.0, 60.0, 60.0));
    }

    #[test]
    fn test_rejects_invalid_occluders() {
        let result = Scene::new(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 0.0, 10.0),
        ]);
        assert!(matches!(result, Err(SceneError::InvalidOccluder { index: 1, .. })));

        let result = Scene::new(vec![Rect::new(f64::NAN, 0.0, 10.0, 10.0)]);
        assert!(matches!(result, Err(SceneError::InvalidOccluder { index: 0, .. })));

        let result = Scene::new(vec![Rect::new(0.0, 0.0, 10.0, -3.0)]);
        assert!(matches!(result, Err(SceneError::InvalidOccluder { index: 0, .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join("flashlight_scene_test.txt");
        fs::write(&path, "occluders = []").unwrap();
        let result = SceneData::load_from_file(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(SceneError::UnsupportedFormat(_))));
    }
}
