use std::path::{Path, PathBuf};

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::errors::Result;
use crate::particles::buffer::ParticleVertexBuffer;
use crate::particles::particle::Particle;
use crate::particles::settings::ParticleEmitterSettings;
use crate::particles::vertex::ParticleVertex;
use crate::scene::WorldPosition;

/// Emits particles from a fixed pool and streams the live ones into a vertex buffer.
///
/// The pool never grows: expired particles are recycled at a steady rate of
/// one spawn per `average lifetime / pool size` seconds, so a running emitter
/// keeps roughly the whole pool alive.
#[derive(Debug)]
pub struct ParticleEmitterComponent {
    particles: Vec<Particle>,
    settings: ParticleEmitterSettings,
    vertex_buffer: ParticleVertexBuffer,

    active_particles: usize,
    last_particle_init: f32,
    is_active: bool,

    texture_path: Option<PathBuf>,
    rng: StdRng,
}

impl ParticleEmitterComponent {
    /// Creates an emitter with `particle_count` dead particles.
    pub fn new(settings: ParticleEmitterSettings, particle_count: usize) -> Result<Self> {
        Self::with_rng(settings, particle_count, StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates an emitter with a deterministic spawn sequence.
    pub fn with_seed(
        settings: ParticleEmitterSettings,
        particle_count: usize,
        seed: u64,
    ) -> Result<Self> {
        debug!("ParticleEmitterComponent: seeded with {seed}");
        Self::with_rng(settings, particle_count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        settings: ParticleEmitterSettings,
        particle_count: usize,
        rng: StdRng,
    ) -> Result<Self> {
        settings.validate()?;

        if particle_count == 0 {
            warn!("ParticleEmitterComponent: created with an empty particle pool");
        }
        debug!("ParticleEmitterComponent: pool of {particle_count} particles");

        Ok(Self {
            particles: vec![Particle::new(); particle_count],
            settings,
            vertex_buffer: ParticleVertexBuffer::with_capacity(
                particle_count,
                Some("ParticleEmitterVertices"),
            ),
            active_particles: 0,
            last_particle_init: 0.0,
            is_active: true,
            texture_path: None,
            rng,
        })
    }

    /// Path of the sprite texture the draw step should bind.
    #[must_use]
    pub fn with_texture(mut self, path: impl Into<PathBuf>) -> Self {
        self.texture_path = Some(path.into());
        self
    }

    /// Seconds between two spawns in steady state.
    #[must_use]
    pub fn spawn_interval(&self) -> f32 {
        self.settings.average_energy() / self.particles.len() as f32
    }

    /// Ages every particle, recycles dead ones and rewrites the vertex buffer.
    ///
    /// Returns the number of vertices written, which the draw step submits.
    /// A negative or non-finite `elapsed_seconds` is treated as zero.
    pub fn update(&mut self, elapsed_seconds: f32, origin: &impl WorldPosition) -> usize {
        let elapsed_seconds = if elapsed_seconds.is_finite() {
            elapsed_seconds.max(0.0)
        } else {
            warn!("ParticleEmitterComponent: ignoring non-finite elapsed time {elapsed_seconds}");
            0.0
        };

        let particle_interval = self.spawn_interval();
        // The backlog never exceeds one lifetime's worth of spawns.
        self.last_particle_init =
            (self.last_particle_init + elapsed_seconds).min(self.settings.average_energy());

        let spawn_position = origin.world_position();
        let settings = &self.settings;
        let rng = &mut self.rng;
        let mut active = 0;

        let mut mapped = self.vertex_buffer.map_write_discard();
        for particle in &mut self.particles {
            particle.update(elapsed_seconds);

            if particle.is_active() {
                mapped.push(particle.vertex_info());
                active += 1;
            } else if self.is_active && self.last_particle_init >= particle_interval {
                particle.init(spawn_position, settings, rng);
                mapped.push(particle.vertex_info());
                active += 1;
                // Keep the overrun so the spawn cadence stays even.
                self.last_particle_init -= particle_interval;
            }
        }
        drop(mapped);

        self.active_particles = active;
        active
    }

    // ========================================================================
    // Getters & Setters
    // ========================================================================

    /// Live particles written by the last update.
    #[inline]
    #[must_use]
    pub fn active_particles(&self) -> usize {
        self.active_particles
    }

    #[inline]
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Vertices of the live particles, compacted from offset 0.
    #[must_use]
    pub fn vertices(&self) -> &[ParticleVertex] {
        self.vertex_buffer.vertices()
    }

    #[must_use]
    pub fn vertex_buffer(&self) -> &ParticleVertexBuffer {
        &self.vertex_buffer
    }

    /// Whether new particles may spawn. Live particles age out either way.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    #[must_use]
    pub fn settings(&self) -> &ParticleEmitterSettings {
        &self.settings
    }

    /// Replaces the spawn settings. Only particles spawned afterwards use them;
    /// live particles keep the velocity and color they were spawned with.
    pub fn set_settings(&mut self, settings: ParticleEmitterSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    #[must_use]
    pub fn texture_path(&self) -> Option<&Path> {
        self.texture_path.as_deref()
    }

    /// Seconds accumulated towards the next spawn.
    #[inline]
    #[must_use]
    pub fn spawn_timer(&self) -> f32 {
        self.last_particle_init
    }
}
