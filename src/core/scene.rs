use super::particle::Particle;
use super::registry::ParticleRegistry;
use super::streak::ShootingStar;
use super::surface::RenderSurface;
use crate::config::SceneConfig;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Everything the animation mutates: particles, the shooting star, the last
/// pointer position and the random source.
///
/// The pointer adapter only appends (through [`Scene::on_pointer_move`]); the
/// frame scheduler only updates and removes (through [`Scene::render`]).
pub struct Scene<R: Rng = StdRng> {
    pub config: SceneConfig,
    registry: ParticleRegistry,
    star: ShootingStar,
    pointer: Option<Vec2>,
    rng: R,
    cap_reached: bool,
}

impl Scene<StdRng> {
    /// Scene seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: SceneConfig, bounds: Vec2) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, bounds, rng)
    }
}

impl<R: Rng> Scene<R> {
    pub fn with_rng(config: SceneConfig, bounds: Vec2, mut rng: R) -> Self {
        let star = ShootingStar::new(&mut rng, bounds.x);
        let mut registry = ParticleRegistry::with_capacity(config.ambient_count);
        for _ in 0..config.ambient_count {
            registry.append(Particle::ambient(&mut rng, bounds));
        }
        log::info!(
            "[scene] {} ambient particles in {:.0}x{:.0}, sparkle cap {:?}",
            registry.len(),
            bounds.x,
            bounds.y,
            config.sparkle_cap
        );
        Self {
            config,
            registry,
            star,
            pointer: None,
            rng,
            cap_reached: false,
        }
    }

    #[inline]
    pub fn registry(&self) -> &ParticleRegistry {
        &self.registry
    }

    #[inline]
    pub fn star(&self) -> &ShootingStar {
        &self.star
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Record the pointer and emit one burst of sparkles at it.
    /// Returns how many sparkles were actually added.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> usize {
        let at = Vec2::new(x, y);
        self.pointer = Some(at);

        let burst = self.config.sparkles_per_move;
        let room = match self.config.sparkle_cap {
            Some(cap) => cap.saturating_sub(self.registry.sparkle_count()),
            None => usize::MAX,
        };
        let count = burst.min(room);
        if count < burst {
            if !self.cap_reached {
                log::warn!(
                    "[scene] sparkle cap {} reached, dropping part of the burst",
                    self.registry.sparkle_count()
                );
                self.cap_reached = true;
            }
        } else {
            self.cap_reached = false;
        }

        for _ in 0..count {
            self.registry.append(Particle::sparkle(&mut self.rng, at));
        }
        count
    }

    /// One animation frame: clear, streak, then particles.
    pub fn render<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        surface.clear();
        if self.star.update(&mut self.rng, surface.width()) {
            log::trace!("[scene] shooting star restarted at x={:.0}", self.star.position.x);
        }
        self.star.draw(surface);
        self.registry.prune_and_render(surface)
    }
}
