//! Scene collaborators
//!
//! The narrow views of the scene that the animator and emitter depend on:
//! where an entity is ([`WorldPosition`], [`Transform`]) and how the frame is
//! viewed ([`CameraMatrices`], [`Camera`]).

pub mod camera;
pub mod transform;

pub use camera::{Camera, CameraMatrices};
pub use transform::{Transform, WorldPosition};
