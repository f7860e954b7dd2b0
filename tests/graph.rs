extern crate env_logger;
extern crate two;

use two::{Object, Rect};

fn approx(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "{} != {}", a, b);
}

#[test]
fn world_transforms_compose() {
    let _ = env_logger::try_init();
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let group = factory.group();
    group.set_position([10.0, 20.0].into());
    group.set_scale(2.0);
    let quad = factory.quad([8.0, 8.0].into(), two::color::WHITE);
    quad.set_position([5.0, 0.0].into());
    group.add(&quad);
    scene.add(&group);

    let mut sync = scene.sync_guard();
    let node = sync.resolve(&quad);
    approx(node.world_transform.position.x, 20.0);
    approx(node.world_transform.position.y, 20.0);
    approx(node.world_transform.scale, 2.0);
    assert!(node.world_visible);
    assert_eq!(node.world_clip, None);
}

#[test]
fn visibility_is_inherited() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let group = factory.group();
    let quad = factory.quad([8.0, 8.0].into(), two::color::WHITE);
    group.add(&quad);
    scene.add(&group);
    group.set_visible(false);

    let mut sync = scene.sync_guard();
    assert!(!sync.resolve(&group).world_visible);
    assert!(sync.resolve(&quad).visible);
    assert!(!sync.resolve(&quad).world_visible);
}

#[test]
fn objects_outside_the_scene_stay_invisible() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());
    let quad = factory.quad([8.0, 8.0].into(), two::color::WHITE);

    let mut sync = scene.sync_guard();
    assert!(!sync.resolve(&quad).world_visible);
}

#[test]
fn removal_detaches_the_child() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let group = factory.group();
    let a = factory.quad([1.0, 1.0].into(), two::color::RED);
    let b = factory.quad([1.0, 1.0].into(), two::color::GREEN);
    let c = factory.quad([1.0, 1.0].into(), two::color::BLUE);
    group.add(&a);
    group.add(&b);
    group.add(&c);
    scene.add(&group);
    scene.sync_guard();

    group.remove(&b);
    group.set_position([100.0, 0.0].into());

    let mut sync = scene.sync_guard();
    approx(sync.resolve(&a).world_transform.position.x, 100.0);
    approx(sync.resolve(&c).world_transform.position.x, 100.0);
    // The removed child is no longer reached by graph updates.
    approx(sync.resolve(&b).world_transform.position.x, 0.0);
}

#[test]
fn clip_bounds_follow_the_container() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let mut panel = factory.clipped_sprite([200.0, 100.0].into());
    panel.set_position([50.0, 40.0].into());
    panel.set_clipping(true);
    let content = factory.quad([300.0, 300.0].into(), two::color::RED);
    panel.add(&content);
    scene.add(&panel);

    let mut sync = scene.sync_guard();
    assert_eq!(
        sync.clip_bounds(&panel),
        Some(Rect::new(50.0, 40.0, 200.0, 100.0))
    );
    // Children are constrained by the same rectangle.
    assert_eq!(
        sync.resolve(&content).world_clip,
        Some(Rect::new(50.0, 40.0, 200.0, 100.0))
    );
}

#[test]
fn clip_bounds_clamp_to_the_stage() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([100.0, 100.0].into());

    let mut panel = factory.clipped_sprite([200.0, 100.0].into());
    panel.set_position([50.0, 40.0].into());
    panel.set_clipping(true);
    scene.add(&panel);

    let mut sync = scene.sync_guard();
    assert_eq!(
        sync.clip_bounds(&panel),
        Some(Rect::new(50.0, 40.0, 50.0, 60.0))
    );
}

#[test]
fn disabled_clipping_reports_no_bounds() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let mut panel = factory.clipped_sprite([200.0, 100.0].into());
    scene.add(&panel);
    {
        let mut sync = scene.sync_guard();
        assert_eq!(sync.clip_bounds(&panel), None);
    }

    panel.set_clipping(true);
    {
        let mut sync = scene.sync_guard();
        assert!(sync.clip_bounds(&panel).is_some());
    }

    panel.set_clipping(false);
    let mut sync = scene.sync_guard();
    assert_eq!(sync.clip_bounds(&panel), None);
}

#[test]
fn nested_clips_intersect() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let mut outer = factory.clipped_sprite([100.0, 100.0].into());
    outer.set_clipping(true);
    let mut inner = factory.clipped_sprite([100.0, 100.0].into());
    inner.set_position([50.0, 50.0].into());
    inner.set_clipping(true);
    outer.add(&inner);
    scene.add(&outer);

    let mut sync = scene.sync_guard();
    assert_eq!(
        sync.clip_bounds(&inner),
        Some(Rect::new(50.0, 50.0, 50.0, 50.0))
    );
}

#[test]
fn rotated_clip_windows_use_their_bounds() {
    use std::f32::consts::FRAC_PI_2;

    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let mut panel = factory.clipped_sprite([200.0, 100.0].into());
    panel.set_rotation(FRAC_PI_2);
    panel.set_clipping(true);
    scene.add(&panel);

    let mut sync = scene.sync_guard();
    let clip = sync.resolve(&panel).world_clip.unwrap();
    approx(clip.x, -100.0);
    approx(clip.y, 0.0);
    approx(clip.w, 100.0);
    approx(clip.h, 200.0);
}

#[test]
fn stage_points_convert_to_local_space() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let group = factory.group();
    group.set_position([50.0, 40.0].into());
    group.set_scale(2.0);
    scene.add(&group);

    let mut sync = scene.sync_guard();
    let local = sync.stage_to_local(&group, [60.0, 50.0].into());
    approx(local.x, 5.0);
    approx(local.y, 5.0);
}

#[test]
fn sprites_take_their_size_from_the_texture() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let map = two::Texture::from_pixels(vec![0xFF; 32 * 16 * 4], 32, 16);
    assert_eq!(map.uv_range(), [0.0, 0.0, 1.0, 1.0]);
    let sprite = factory.sprite(map);
    sprite.set_texel_range([0, 0], [16, 16]);
    scene.add(&sprite);

    let mut sync = scene.sync_guard();
    assert!(sync.resolve(&sprite).world_visible);
}

#[test]
fn missing_textures_error_out() {
    let mut factory = two::Factory::new();
    assert!(factory.load_texture("no/such/file.png").is_err());
}

#[test]
fn resizing_the_clip_quad_resizes_the_window() {
    let mut factory = two::Factory::new();
    let mut scene = factory.scene([480.0, 320.0].into());

    let mut panel = factory.clipped_sprite([200.0, 100.0].into());
    panel.set_clipping(true);
    scene.add(&panel);

    panel.clip().set_size([80.0, 60.0].into());
    panel.clip().set_position([10.0, 10.0].into());

    let mut sync = scene.sync_guard();
    assert_eq!(
        sync.clip_bounds(&panel),
        Some(Rect::new(10.0, 10.0, 80.0, 60.0))
    );
}
