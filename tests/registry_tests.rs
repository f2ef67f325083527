// Host-side tests for the particle registry: paint order and pruning.

mod common;

use common::{DrawCall, RecordingSurface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield::constants::{SPARKLE_FADE_RATE, WHITE};
use starfield::core::{Particle, ParticleKind, ParticleRegistry};

fn sparkle_at(x: f32, opacity: f32) -> Particle {
    Particle {
        position: Vec2::new(x, 0.0),
        velocity: Vec2::ZERO,
        radius: 1.0,
        color: WHITE,
        opacity,
        kind: ParticleKind::Sparkle {
            fade_rate: SPARKLE_FADE_RATE,
        },
    }
}

#[test]
fn append_keeps_paint_order_and_counts() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut reg = ParticleRegistry::new();
    assert!(reg.is_empty());
    reg.append(Particle::ambient(&mut rng, Vec2::splat(100.0)));
    reg.append(sparkle_at(1.0, 0.5));
    reg.append(sparkle_at(2.0, 0.5));
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.ambient_count(), 1);
    assert_eq!(reg.sparkle_count(), 2);
    let xs: Vec<f32> = reg.iter().skip(1).map(|p| p.position.x).collect();
    assert_eq!(xs, vec![1.0, 2.0]);
}

#[test]
fn removes_only_the_spent_sparkle_and_keeps_order() {
    let mut reg = ParticleRegistry::new();
    // After one update these become 0.011, -0.01 and 0.5.
    reg.append(sparkle_at(0.0, 0.026));
    reg.append(sparkle_at(1.0, 0.005));
    reg.append(sparkle_at(2.0, 0.515));

    let mut surface = RecordingSurface::new(10.0, 10.0);
    let removed = reg.prune_and_render(&mut surface);

    assert_eq!(removed, 1);
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.sparkle_count(), 2);
    let xs: Vec<f32> = reg.iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![0.0, 2.0]);
    assert!((reg.as_slice()[0].opacity - 0.011).abs() < 1e-6);
    assert!((reg.as_slice()[1].opacity - 0.5).abs() < 1e-6);
    // Every particle was updated and drawn exactly once, the spent one included.
    assert_eq!(surface.circles().count(), 3);
}

#[test]
fn adjacent_spent_sparkles_are_all_removed() {
    let mut reg = ParticleRegistry::new();
    reg.append(sparkle_at(0.0, 0.01));
    reg.append(sparkle_at(1.0, 0.0));
    reg.append(sparkle_at(2.0, 0.3));
    reg.append(sparkle_at(3.0, 0.012));

    let mut surface = RecordingSurface::new(10.0, 10.0);
    assert_eq!(reg.prune_and_render(&mut surface), 3);
    let xs: Vec<f32> = reg.iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![2.0]);
}

#[test]
fn spent_sparkles_are_never_drawn_again() {
    let mut reg = ParticleRegistry::new();
    reg.append(sparkle_at(0.0, 0.05)); // spent on frame 4
    reg.append(sparkle_at(1.0, 0.9));

    let mut surface = RecordingSurface::new(10.0, 10.0);
    let mut draws_of_first = 0;
    for _ in 0..10 {
        reg.prune_and_render(&mut surface);
        draws_of_first += surface
            .take()
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { center, .. } if center.x == 0.0))
            .count();
    }
    assert_eq!(draws_of_first, 4);
    assert_eq!(reg.len(), 1);
}

#[test]
fn ambient_particles_are_never_removed() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut reg = ParticleRegistry::new();
    for _ in 0..400 {
        reg.append(Particle::ambient(&mut rng, Vec2::new(640.0, 480.0)));
    }
    let mut surface = RecordingSurface::new(640.0, 480.0);
    for _ in 0..1000 {
        assert_eq!(reg.prune_and_render(&mut surface), 0);
        surface.take();
    }
    assert_eq!(reg.len(), 400);
    assert_eq!(reg.sparkle_count(), 0);
}
