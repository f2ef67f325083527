use super::surface::RenderSurface;
use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Diagonal shooting star that fades out and restarts from the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub position: Vec2,
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl ShootingStar {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f32) -> Self {
        let mut star = Self {
            position: Vec2::ZERO,
            length: STREAK_LENGTH_MIN,
            speed: STREAK_SPEED_MIN,
            opacity: 1.0,
        };
        star.reset(rng, width);
        star
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32) {
        self.position = Vec2::new(rng.gen::<f32>() * width.max(0.0), 0.0);
        self.length = rng.gen_range(STREAK_LENGTH_MIN..STREAK_LENGTH_MAX);
        self.speed = rng.gen_range(STREAK_SPEED_MIN..STREAK_SPEED_MAX);
        self.opacity = 1.0;
    }

    /// Advance one frame. Returns `true` when the star faded out and restarted.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32) -> bool {
        self.position += Vec2::splat(self.speed);
        self.opacity -= STREAK_FADE_STEP;
        if self.opacity <= STREAK_FADE_EPSILON {
            self.reset(rng, width);
            return true;
        }
        false
    }

    /// Tail end of the streak, `length` back along the diagonal.
    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.position - Vec2::splat(self.length)
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_line(
            self.position,
            self.tail(),
            WHITE,
            self.opacity.clamp(0.0, 1.0),
            STREAK_LINE_WIDTH,
        );
    }
}
