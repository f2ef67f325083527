use super::surface::{Color, RenderSurface};
use crate::constants::*;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Kind-specific opacity behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    /// Background star; opacity oscillates forever by `blink_rate` per frame.
    Ambient { blink_rate: f32 },
    /// Pointer sparkle; opacity drops by `fade_rate` per frame until spent.
    Sparkle { fade_rate: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
    pub opacity: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// White background star placed uniformly inside `bounds`.
    pub fn ambient<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.x.max(0.0),
            rng.gen::<f32>() * bounds.y.max(0.0),
        );
        Self {
            position,
            velocity: random_velocity(rng),
            radius: rng.gen_range(AMBIENT_RADIUS_MIN..AMBIENT_RADIUS_MAX),
            color: WHITE,
            opacity: rng.gen(),
            kind: ParticleKind::Ambient {
                blink_rate: rng.gen_range(BLINK_RATE_MIN..BLINK_RATE_MAX),
            },
        }
    }

    /// Sparkle born at the pointer with a random palette color.
    pub fn sparkle<R: Rng + ?Sized>(rng: &mut R, at: Vec2) -> Self {
        let radius = rng.gen_range(SPARKLE_RADIUS_MIN..SPARKLE_RADIUS_MAX);
        let velocity = random_velocity(rng);
        let color = *SPARKLE_PALETTE.choose(rng).unwrap_or(&WHITE);
        Self {
            position: at,
            velocity,
            radius,
            color,
            opacity: rng.gen(),
            kind: ParticleKind::Sparkle {
                fade_rate: SPARKLE_FADE_RATE,
            },
        }
    }

    #[inline]
    pub fn is_sparkle(&self) -> bool {
        matches!(self.kind, ParticleKind::Sparkle { .. })
    }

    /// A sparkle whose opacity reached zero; ambient particles never expire.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.is_sparkle() && self.opacity <= 0.0
    }

    /// One frame of motion followed by the kind's opacity rule.
    pub fn update(&mut self) {
        self.position += self.velocity;
        match &mut self.kind {
            ParticleKind::Sparkle { fade_rate } => {
                self.opacity -= *fade_rate;
            }
            ParticleKind::Ambient { blink_rate } => {
                self.opacity += *blink_rate;
                // Point the rate back inside on exit; a plain negation could
                // ping-pong outside [0, 1] when rounding lands just past a bound.
                if self.opacity > 1.0 {
                    *blink_rate = -blink_rate.abs();
                } else if self.opacity < 0.0 {
                    *blink_rate = blink_rate.abs();
                }
            }
        }
    }

    pub fn glow(&self) -> f32 {
        match self.kind {
            ParticleKind::Sparkle { .. } => SPARKLE_GLOW,
            ParticleKind::Ambient { .. } => AMBIENT_GLOW,
        }
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(
            self.position,
            self.radius,
            self.color,
            self.glow(),
            self.opacity.clamp(0.0, 1.0),
        );
    }
}

#[inline]
fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(-SPEED_SPAN..SPEED_SPAN),
        rng.gen_range(-SPEED_SPAN..SPEED_SPAN),
    )
}
