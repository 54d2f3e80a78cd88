/// 可見多邊形綜合測試
///
/// 以固定種子的隨機場景檢查多邊形性質

use flashlight::config::Setting;
use flashlight::scene::{Scene, SceneData};
use flashlight::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use vek::Vec2;

const EPSILON: f64 = 1e-9;

fn random_scene(rng: &mut Pcg64, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|_| {
            Rect::new(
                rng.random_range(0.0..800.0),
                rng.random_range(0.0..600.0),
                rng.random_range(5.0..120.0),
                rng.random_range(5.0..120.0),
            )
        })
        .collect()
}

#[test]
fn test_random_scenes_keep_polygon_invariants() {
    let mut rng = Pcg64::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let count = rng.random_range(0..12);
        let occluders = random_scene(&mut rng, count);
        let origin = Vec2::new(rng.random_range(0.0..800.0), rng.random_range(0.0..600.0));
        let radius = rng.random_range(10.0..400.0);
        let samples = rng.random_range(1..720);

        let polygon = compute_visibility_polygon(origin, radius, samples, &occluders);

        // 頂點數
        assert_eq!(polygon.len(), samples as usize + 1);
        // 首尾重合
        assert_eq!(polygon[0], polygon[samples as usize]);
        // 全部落在半徑內
        for p in &polygon {
            assert!(origin.distance(*p) <= radius + EPSILON);
        }
        // 每個頂點都在自己的取樣方向上（星形）
        for (i, p) in polygon.iter().enumerate() {
            let d = *p - origin;
            let angle = sample_angle(i as u32, samples);
            let cross = angle.cos() * d.y - angle.sin() * d.x;
            let dot = angle.cos() * d.x + angle.sin() * d.y;
            assert!(cross.abs() <= 1e-6 * radius.max(1.0), "第 {} 點偏離射線方向", i);
            assert!(dot >= 0.0);
        }
    }
}

#[test]
fn test_random_scenes_are_deterministic() {
    let mut rng = Pcg64::seed_from_u64(42);
    let occluders = random_scene(&mut rng, 20);

    for _ in 0..10 {
        let origin = Vec2::new(rng.random_range(0.0..800.0), rng.random_range(0.0..600.0));
        let a = compute_visibility_polygon(origin, 300.0, 360, &occluders);
        let b = compute_visibility_polygon(origin, 300.0, 360, &occluders);
        let bits = |v: &[Point]| v.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }
}

#[test]
fn test_occluder_order_does_not_change_result_without_ties() {
    let mut rng = Pcg64::seed_from_u64(7);
    let occluders = random_scene(&mut rng, 8);
    let mut reversed = occluders.clone();
    reversed.reverse();

    let origin = Vec2::new(400.3, 300.7);
    let a = compute_visibility_polygon(origin, 350.0, 360, &occluders);
    let b = compute_visibility_polygon(origin, 350.0, 360, &reversed);
    for (p, q) in a.iter().zip(b.iter()) {
        assert!(p.distance(*q) < 1e-6);
    }
}

#[test]
fn test_demo_scene_end_to_end() {
    let mut setting = Setting::default();
    setting.viewport = Viewport::new(1280.0, 720.0);

    let data = SceneData::from_toml_str(
        r#"
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
        "#,
    )
    .unwrap();
    let scene = data.resolve(&setting.viewport).unwrap();
    assert_eq!(scene, Scene::new(vec![
        Rect::new(640.0, 360.0, 60.0, 60.0),
        Rect::new(250.0, 500.0, 60.0, 120.0),
    ]).unwrap());

    let mut state = LightState::with_scene(setting, scene);
    // 半徑 = 1280 / 5
    assert_eq!(state.light().radius, 256.0);

    // 光源在中央牆壁左側，正右方被擋
    let frame = state.handle(HostEvent::PointerMoved { x: 600.0, y: 390.0 }).unwrap();
    assert_eq!(frame.polygon.len(), 361);
    assert_eq!(frame.polygon[0], Vec2::new(640.0, 390.0));
    // 正左方沒有東西
    assert!((frame.polygon[180] - Vec2::new(344.0, 390.0)).magnitude() < 1e-9);

    let json = frame.to_json().unwrap();
    assert!(json.contains("\"polygon\""));
    assert!(frame.svg_path().starts_with("M640.00 390.00 L"));
}
