use std::f32::consts::PI;

use glam::Vec3;
use rand::RngExt;
use rand::rngs::StdRng;

use crate::particles::settings::ParticleEmitterSettings;
use crate::particles::vertex::ParticleVertex;

/// One slot of an emitter's particle pool.
///
/// A particle is alive while it has energy left. Dead particles keep their
/// last state until the emitter re-initialises them. Motion and color are
/// fixed at spawn time.
#[derive(Debug, Clone, Default)]
pub struct Particle {
    vertex: ParticleVertex,
    velocity: Vec3,
    base_alpha: f32,
    energy: f32,
    total_energy: f32,
    init_size: f32,
    size_grow: f32,
}

impl Particle {
    /// Creates a dead particle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the particle back to life around `origin`.
    pub fn init(&mut self, origin: Vec3, settings: &ParticleEmitterSettings, rng: &mut StdRng) {
        self.energy = random_between(rng, settings.min_energy, settings.max_energy);
        self.total_energy = self.energy;

        let direction = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(Vec3::X);
        let distance = random_between(
            rng,
            settings.min_emitter_range,
            settings.max_emitter_range,
        );

        self.velocity = settings.velocity;
        self.base_alpha = settings.color.w;
        self.init_size = random_between(rng, settings.min_size, settings.max_size);
        self.size_grow = random_between(rng, settings.min_size_grow, settings.max_size_grow);

        self.vertex = ParticleVertex::new(
            origin + direction * distance,
            self.init_size,
            settings.color,
            rng.random_range(-PI..PI),
        );
    }

    /// Ages the particle and moves it along its spawn velocity.
    pub fn update(&mut self, elapsed_seconds: f32) {
        if !self.is_active() {
            return;
        }

        self.energy -= elapsed_seconds;
        if self.energy <= 0.0 {
            self.energy = 0.0;
            return;
        }

        let position = self.vertex.position() + self.velocity * elapsed_seconds;
        self.vertex.position = position.to_array();

        let life = self.life_fraction();
        self.vertex.color[3] = self.base_alpha * life;
        // Size goes from `init_size` to `init_size * size_grow` over the lifetime.
        self.vertex.size = self.init_size * (self.size_grow + (1.0 - self.size_grow) * life);
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.energy > 0.0
    }

    /// Remaining lifetime in seconds.
    #[inline]
    #[must_use]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Remaining share of the lifetime, 1 right after spawning.
    #[must_use]
    pub fn life_fraction(&self) -> f32 {
        if self.total_energy > 0.0 {
            (self.energy / self.total_energy).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn vertex_info(&self) -> ParticleVertex {
        self.vertex
    }
}

/// Uniform value in `[min, max)`, or `min` for an empty range.
fn random_between(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random_range(0.0..1.0f32)
}

#[cfg(test)]
mod tests {
    use glam::Vec4;
    use rand::SeedableRng;

    use super::*;

    fn settings() -> ParticleEmitterSettings {
        ParticleEmitterSettings {
            min_energy: 1.0,
            max_energy: 1.0,
            min_size: 2.0,
            max_size: 2.0,
            min_size_grow: 0.5,
            max_size_grow: 0.5,
            min_emitter_range: 0.0,
            max_emitter_range: 0.0,
            color: Vec4::new(1.0, 1.0, 1.0, 0.8),
            ..Default::default()
        }
    }

    #[test]
    fn new_particle_is_dead() {
        assert!(!Particle::new().is_active());
    }

    #[test]
    fn alpha_and_size_follow_remaining_life() {
        let settings = settings();
        let mut rng = StdRng::seed_from_u64(7);
        let mut particle = Particle::new();
        particle.init(Vec3::ZERO, &settings, &mut rng);

        particle.update(0.5);
        let vertex = particle.vertex_info();
        assert!((vertex.color[3] - 0.4).abs() < 1e-5);
        assert!((vertex.size - 1.5).abs() < 1e-5);
    }

    #[test]
    fn dies_when_energy_runs_out() {
        let settings = settings();
        let mut rng = StdRng::seed_from_u64(7);
        let mut particle = Particle::new();
        particle.init(Vec3::ZERO, &settings, &mut rng);

        particle.update(1.0);
        assert!(!particle.is_active());
        assert!(particle.energy().abs() < f32::EPSILON);
    }

    #[test]
    fn later_settings_do_not_reach_live_particle() {
        let mut settings = settings();
        let mut rng = StdRng::seed_from_u64(7);
        let mut particle = Particle::new();
        particle.init(Vec3::ZERO, &settings, &mut rng);

        settings.velocity = Vec3::new(0.0, 10.0, 0.0);
        settings.color.w = 0.0;
        particle.update(0.5);

        let vertex = particle.vertex_info();
        assert_eq!(particle.velocity(), Vec3::ZERO);
        assert!(vertex.position().abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!((vertex.color[3] - 0.4).abs() < 1e-5);
    }
}
