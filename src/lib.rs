//! Pyre Engine
//!
//! Two per-frame engine components for a real-time 3D renderer:
//!
//! - [`ModelAnimator`]: plays keyframed skeletal clips and blends the bone
//!   transforms between the two keys enclosing the playback cursor.
//! - [`ParticleEmitterComponent`]: recycles a fixed pool of particles and
//!   streams the live ones into a point-sprite vertex buffer.
//!
//! Both are driven by a single `update(elapsed_seconds)` call per frame from
//! the simulation loop. Recovered problems (unknown clips, missing keys) are
//! reported through the [`log`] facade.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod particles;
pub mod scene;
pub mod utils;

pub use animation::{AnimatedMesh, AnimationClip, AnimationKey, ClipSource, ModelAnimator};
pub use errors::{PyreError, Result};
pub use particles::{
    ParticleDrawUniforms, ParticleEmitterComponent, ParticleEmitterSettings, ParticleVertex,
};
pub use scene::{Camera, CameraMatrices, Transform, WorldPosition};
pub use utils::GameTime;
