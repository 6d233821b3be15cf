//! Skeletal Animation
//!
//! Keyframed bone animation for skinned meshes:
//!
//! - [`AnimationClip`] / [`AnimationKey`]: immutable keyframe data from the mesh asset
//! - [`ClipSource`]: narrow read-only view of an asset's clips and bone count
//! - [`ModelAnimator`]: playback state and per-frame pose blending
//!
//! Each frame the animator converts elapsed seconds to clip ticks, finds the
//! two keys enclosing the cursor and blends every bone between them
//! (scale and translation linearly, rotation spherically).

pub mod values;
pub mod keys;
pub mod clip;
pub mod source;
pub mod animator;

pub use clip::{AnimationClip, AnimationKey};
pub use source::{AnimatedMesh, ClipSource};
pub use animator::ModelAnimator;
pub use values::{BonePose, Interpolatable};
