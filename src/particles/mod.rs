//! Particle Emission
//!
//! A CPU-simulated particle pool rendered as point sprites:
//!
//! - [`Particle`]: one pooled particle with an energy based lifetime
//! - [`ParticleEmitterComponent`]: owns the pool, spawns at a steady rate and
//!   compacts live particles into a vertex buffer each frame
//! - [`ParticleVertexBuffer`] / [`MappedVertices`]: scoped write access to the
//!   streamed vertex data
//! - [`ParticleEmitterSettings`]: spawn parameters, loadable from JSON
//!
//! ```rust,ignore
//! use pyre::particles::{ParticleEmitterComponent, ParticleEmitterSettings};
//!
//! let mut emitter = ParticleEmitterComponent::new(ParticleEmitterSettings::default(), 50)?;
//! let count = emitter.update(dt, &glam::Vec3::ZERO);
//! // draw `count` points from emitter.vertices()
//! ```

pub mod settings;
pub mod vertex;
pub mod particle;
pub mod buffer;
pub mod emitter;
pub mod draw;

pub use settings::ParticleEmitterSettings;
pub use vertex::ParticleVertex;
pub use particle::Particle;
pub use buffer::{GpuParticleBuffer, MappedVertices, ParticleVertexBuffer};
pub use emitter::ParticleEmitterComponent;
pub use draw::ParticleDrawUniforms;
