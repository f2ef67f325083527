// Host-side tests for the scene context, pointer bursts and the frame scheduler.

mod common;

use common::{init_logging, DrawCall, RecordingSurface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield::core::{CancelToken, FrameScheduler, Scene};
use starfield::SceneConfig;

const BOUNDS: Vec2 = Vec2::new(1280.0, 720.0);

fn seeded(seed: u64) -> SceneConfig {
    SceneConfig {
        seed: Some(seed),
        ..SceneConfig::default()
    }
}

fn uncapped(seed: u64) -> SceneConfig {
    SceneConfig {
        sparkle_cap: None,
        ..seeded(seed)
    }
}

#[test]
fn starts_with_fixed_ambient_population() {
    init_logging();
    let scene = Scene::new(seeded(1), BOUNDS);
    assert_eq!(scene.registry().len(), 400);
    assert_eq!(scene.registry().ambient_count(), 400);
    assert_eq!(scene.registry().sparkle_count(), 0);
    assert_eq!(scene.pointer(), None);
    assert_eq!(scene.star().position.y, 0.0);
}

#[test]
fn each_pointer_move_adds_one_burst() {
    init_logging();
    let mut scene = Scene::new(uncapped(2), BOUNDS);
    for k in 1..=25 {
        let added = scene.on_pointer_move(10.0 * k as f32, 5.0);
        assert_eq!(added, 16);
        assert_eq!(scene.registry().len(), 400 + 16 * k);
    }
    assert_eq!(scene.pointer(), Some(Vec2::new(250.0, 5.0)));
}

#[test]
fn burst_spawns_at_the_latest_pointer() {
    let mut scene = Scene::new(uncapped(3), BOUNDS);
    scene.on_pointer_move(1.0, 1.0);
    scene.on_pointer_move(300.0, 200.0);
    let tail: Vec<Vec2> = scene
        .registry()
        .iter()
        .skip(400 + 16)
        .map(|p| p.position)
        .collect();
    assert_eq!(tail.len(), 16);
    assert!(tail.iter().all(|p| *p == Vec2::new(300.0, 200.0)));
    assert!(scene.registry().iter().skip(400).all(|p| p.is_sparkle()));
}

#[test]
fn sparkle_cap_truncates_bursts() {
    init_logging();
    let config = SceneConfig {
        sparkle_cap: Some(40),
        ..seeded(4)
    };
    let mut scene = Scene::new(config, BOUNDS);
    assert_eq!(scene.on_pointer_move(0.0, 0.0), 16);
    assert_eq!(scene.on_pointer_move(0.0, 0.0), 16);
    assert_eq!(scene.on_pointer_move(0.0, 0.0), 8);
    assert_eq!(scene.on_pointer_move(0.0, 0.0), 0);
    assert_eq!(scene.registry().sparkle_count(), 40);
    assert_eq!(scene.registry().len(), 440);
}

#[test]
fn sparkles_fade_out_and_population_returns_to_ambient() {
    let mut scene = Scene::new(uncapped(5), BOUNDS);
    let mut surface = RecordingSurface::new(BOUNDS.x, BOUNDS.y);
    scene.on_pointer_move(640.0, 360.0);
    scene.on_pointer_move(641.0, 361.0);
    let mut removed = 0;
    for _ in 0..67 {
        removed += scene.render(&mut surface);
        surface.take();
    }
    assert_eq!(removed, 32);
    assert_eq!(scene.registry().len(), 400);
}

#[test]
fn same_seed_gives_same_scene() {
    let mut a = Scene::new(seeded(77), BOUNDS);
    let mut b = Scene::new(seeded(77), BOUNDS);
    assert_eq!(a.registry().as_slice(), b.registry().as_slice());
    assert_eq!(a.star(), b.star());

    let mut sa = RecordingSurface::new(BOUNDS.x, BOUNDS.y);
    let mut sb = RecordingSurface::new(BOUNDS.x, BOUNDS.y);
    for i in 0..120 {
        if i % 7 == 0 {
            a.on_pointer_move(i as f32, i as f32);
            b.on_pointer_move(i as f32, i as f32);
        }
        a.render(&mut sa);
        b.render(&mut sb);
    }
    assert_eq!(a.registry().as_slice(), b.registry().as_slice());
    assert_eq!(a.star(), b.star());
    assert_eq!(sa.calls, sb.calls);
}

#[test]
fn with_rng_accepts_any_rng() {
    let scene = Scene::with_rng(
        SceneConfig {
            ambient_count: 3,
            ..SceneConfig::default()
        },
        BOUNDS,
        StdRng::seed_from_u64(6),
    );
    assert_eq!(scene.registry().len(), 3);
}

#[test]
fn frame_clears_then_draws_streak_then_particles() {
    let mut scene = Scene::new(seeded(8), BOUNDS);
    scene.on_pointer_move(50.0, 50.0);
    let mut surface = RecordingSurface::new(BOUNDS.x, BOUNDS.y);
    scene.render(&mut surface);

    assert_eq!(surface.calls[0], DrawCall::Clear);
    assert!(matches!(surface.calls[1], DrawCall::Line { .. }));
    assert_eq!(surface.circles().count(), 416);
    assert_eq!(surface.calls.len(), 2 + 416);
    // Sparkles were appended last and paint on top.
    match surface.calls.last() {
        Some(DrawCall::Circle { glow, .. }) => assert_eq!(*glow, 10.0),
        other => panic!("unexpected last call {:?}", other),
    }
}

#[test]
fn scheduler_runs_until_cancelled() {
    init_logging();
    let token = CancelToken::new();
    let mut scheduler = FrameScheduler::new(Scene::new(seeded(9), BOUNDS), token.clone());
    let mut surface = RecordingSurface::new(BOUNDS.x, BOUNDS.y);

    assert_eq!(scheduler.run_for(&mut surface, 10), 10);
    assert_eq!(scheduler.frames(), 10);
    assert!(scheduler.tick(&mut surface).is_continue());
    assert_eq!(scheduler.frames(), 11);

    token.cancel();
    assert!(scheduler.token().is_cancelled());
    surface.take();
    assert!(scheduler.tick(&mut surface).is_break());
    assert!(surface.calls.is_empty(), "cancelled tick must not draw");
    assert_eq!(scheduler.run_for(&mut surface, 5), 0);
    assert_eq!(scheduler.frames(), 11);
}

#[test]
fn pointer_input_reaches_scheduled_scene() {
    let mut scheduler = FrameScheduler::new(Scene::new(uncapped(10), BOUNDS), CancelToken::new());
    scheduler.scene_mut().on_pointer_move(5.0, 5.0);
    let mut surface = RecordingSurface::new(BOUNDS.x, BOUNDS.y);
    let _ = scheduler.tick(&mut surface);
    assert_eq!(surface.circles().count(), 416);
    assert_eq!(scheduler.scene().pointer(), Some(Vec2::new(5.0, 5.0)));
}
