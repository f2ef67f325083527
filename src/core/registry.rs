use super::particle::Particle;
use super::surface::RenderSurface;

/// Ordered particle collection. Index order is paint order: later entries
/// are drawn on top.
#[derive(Clone, Debug, Default)]
pub struct ParticleRegistry {
    particles: Vec<Particle>,
    sparkles: usize,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            sparkles: 0,
        }
    }

    pub fn append(&mut self, particle: Particle) {
        if particle.is_sparkle() {
            self.sparkles += 1;
        }
        self.particles.push(particle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of live sparkles.
    #[inline]
    pub fn sparkle_count(&self) -> usize {
        self.sparkles
    }

    #[inline]
    pub fn ambient_count(&self) -> usize {
        self.particles.len() - self.sparkles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Update and draw every particle in order, dropping sparkles whose
    /// opacity reached zero this frame. Each particle is visited exactly once
    /// and survivors keep their relative order. Returns the number removed.
    pub fn prune_and_render<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.update();
            p.draw(surface);
            !p.is_spent()
        });
        let removed = before - self.particles.len();
        self.sparkles -= removed;
        removed
    }
}
