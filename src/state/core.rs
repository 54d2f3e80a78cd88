/// 光照狀態核心結構
///
/// 持有設定、視窗尺寸、目前光源與場景；每個事件都從頭重算一幀
use vek::Vec2;

use crate::comp::LightSource;
use crate::config::Setting;
use crate::msg::HostEvent;
use crate::scene::{Scene, SceneError};
use crate::vision::{compute_visibility_polygon, CursorMarker, LightFrame, Viewport};

pub struct LightState {
    /// 設定
    setting: Setting,
    /// 目前視窗尺寸
    viewport: Viewport,
    /// 光源（位置跟著指標）
    light: LightSource,
    /// 靜態遮擋物
    scene: Scene,
}

impl LightState {
    /// 依設定建立狀態；沒有指定場景檔時使用內建場景
    pub fn new(setting: Setting) -> Result<Self, SceneError> {
        let viewport = setting.viewport;
        let scene = match setting.scene.path.as_ref() {
            Some(path) => Scene::load(path, &viewport)?,
            None => Scene::default_for_viewport(&viewport),
        };
        Ok(Self::with_scene(setting, scene))
    }

    pub fn with_scene(setting: Setting, scene: Scene) -> Self {
        let viewport = setting.viewport;
        let radius = setting.light.radius.resolve(&viewport);
        // 指標尚未移動前，光源停在原點
        let light = LightSource::new(Vec2::new(0.0, 0.0), radius)
            .with_intensity(setting.light.intensity);

        log::info!(
            "light state: viewport {}x{}, radius {:.1}, {} samples, {} occluders",
            viewport.width, viewport.height, radius, setting.light.samples, scene.len()
        );

        Self {
            setting,
            viewport,
            light,
            scene,
        }
    }

    /// 處理一個宿主事件，需要重畫時回傳新的一幀
    pub fn handle(&mut self, event: HostEvent) -> Option<LightFrame> {
        match event {
            HostEvent::PointerMoved { x, y } => {
                self.light.move_to(x, y);
                Some(self.frame())
            },
            HostEvent::Resized { width, height } => {
                self.resize(Viewport::new(width, height));
                Some(self.frame())
            },
            HostEvent::Redraw => Some(self.frame()),
            HostEvent::Quit => None,
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.setting.light.radius.follows_resize() {
            let radius = self.setting.light.radius.resolve(&viewport);
            if radius != self.light.radius {
                log::info!("light radius {:.1} -> {:.1}", self.light.radius, radius);
                self.light.radius = radius;
            }
        }
    }

    /// 以目前狀態計算一幀
    pub fn frame(&self) -> LightFrame {
        let polygon = compute_visibility_polygon(
            self.light.origin,
            self.light.radius,
            self.setting.light.samples,
            self.scene.occluders(),
        );

        LightFrame {
            light: self.light,
            polygon,
            occluders: self.scene.occluders().to_vec(),
            cursor: CursorMarker {
                center: self.light.origin,
                radius: self.setting.light.cursor_radius,
            },
            viewport: self.viewport,
        }
    }

    pub fn light(&self) -> &LightSource {
        &self.light
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
