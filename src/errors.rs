//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`PyreError`] covers:
//! - Invalid animation clip selection (bad index, unknown name, malformed clip)
//! - Particle emitter settings validation
//! - Settings file I/O and JSON decoding
//!
//! Clip selection errors are *recovered* errors: the animator has already fallen
//! back to the identity pose and logged a warning by the time the error is
//! returned, so callers may ignore them.
//!
//! ```rust,ignore
//! use pyre::errors::Result;
//!
//! fn select(animator: &mut pyre::ModelAnimator) -> Result<()> {
//!     animator.set_animation_by_name("Walk")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the Pyre engine.
#[derive(Error, Debug)]
pub enum PyreError {
    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// Clip index is not smaller than the number of clips on the asset.
    #[error("Animation clip index out of bounds: {index} (clip count: {count})")]
    ClipIndexOutOfBounds {
        /// The requested clip index
        index: usize,
        /// Number of clips the asset provides
        count: usize,
    },

    /// No clip with the given name exists on the asset.
    #[error("Animation clip not found: {0}")]
    ClipNotFound(String),

    /// The clip has no keys and cannot produce a pose.
    #[error("Animation clip has no keys: {0}")]
    EmptyClip(String),

    /// A key of the clip does not carry one transform per bone.
    #[error("Animation clip {clip} has a key with {found} bone transforms, expected {expected}")]
    BoneCountMismatch {
        /// Name of the offending clip
        clip: String,
        /// Bone count of the skeleton
        expected: usize,
        /// Bone transforms found on the key
        found: usize,
    },

    // ========================================================================
    // Particle Errors
    // ========================================================================
    /// Emitter settings are out of range.
    #[error("Invalid particle emitter settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // I/O & Format Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, PyreError>`.
pub type Result<T> = std::result::Result<T, PyreError>;
