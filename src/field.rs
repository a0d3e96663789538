// Owns the particle set for one background instance: regenerates it for a
// viewport, and draws + advances every particle once per frame

use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport {
            width: finite_or_zero(width),
            height: finite_or_zero(height),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> ParticleField {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ParticleField {
            config,
            viewport: Viewport::default(),
            particles: Vec::with_capacity(config.particle_count()),
            rng,
        }
    }

    /// Throws away every particle and scatters a fresh set across `viewport`.
    /// Nothing carries over from the previous set.
    pub fn regenerate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.particles.clear();
        for _ in 0..self.config.particle_count() {
            let p = Particle::random(&mut self.rng, viewport, &self.config);
            self.particles.push(p);
        }
    }

    /// Clears the surface, then for each particle draws it where it is and
    /// steps it forward. Stops at the first failed draw call.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        let viewport = self.viewport;
        surface.clear(viewport)?;
        for particle in &mut self.particles {
            surface.fill_circle(particle.pos, particle.radius, particle.color)?;
            particle.step(viewport);
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
