//! Particle Emitter Settings
//!
//! Spawn parameters shared by every particle of one emitter. Settings are plain
//! data with sensible defaults and can be stored as JSON next to the particle
//! texture:
//!
//! ```json
//! {
//!     "min_energy": 1.0,
//!     "max_energy": 2.0,
//!     "velocity": [0.0, 6.0, 0.0],
//!     "color": [1.0, 0.5, 0.1, 0.6]
//! }
//! ```
//!
//! Missing fields fall back to [`ParticleEmitterSettings::default`].

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::errors::{PyreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleEmitterSettings {
    /// Smallest initial particle size.
    pub min_size: f32,
    /// Largest initial particle size.
    pub max_size: f32,
    /// Shortest particle lifetime in seconds.
    pub min_energy: f32,
    /// Longest particle lifetime in seconds.
    pub max_energy: f32,
    /// World space velocity every particle moves with.
    pub velocity: Vec3,
    /// Lower bound of the size change over a lifetime (1 keeps the size).
    pub min_size_grow: f32,
    /// Upper bound of the size change over a lifetime.
    pub max_size_grow: f32,
    /// Closest spawn distance from the emitter.
    pub min_emitter_range: f32,
    /// Furthest spawn distance from the emitter.
    pub max_emitter_range: f32,
    /// Initial color, alpha fades with remaining energy.
    pub color: Vec4,
}

impl Default for ParticleEmitterSettings {
    fn default() -> Self {
        Self {
            min_size: 0.1,
            max_size: 2.0,
            min_energy: 1.0,
            max_energy: 2.0,
            velocity: Vec3::ZERO,
            min_size_grow: 1.0,
            max_size_grow: 1.0,
            min_emitter_range: 9.0,
            max_emitter_range: 10.0,
            color: Vec4::ONE,
        }
    }
}

impl ParticleEmitterSettings {
    /// Average particle lifetime in seconds.
    #[must_use]
    pub fn average_energy(&self) -> f32 {
        (self.min_energy + self.max_energy) * 0.5
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects inverted ranges, negative values, non-finite values and a zero lifetime.
    pub fn validate(&self) -> Result<()> {
        let ranges = [
            ("size", self.min_size, self.max_size),
            ("energy", self.min_energy, self.max_energy),
            ("size_grow", self.min_size_grow, self.max_size_grow),
            ("emitter_range", self.min_emitter_range, self.max_emitter_range),
        ];

        for (name, min, max) in ranges {
            if !min.is_finite() || !max.is_finite() {
                return Err(PyreError::InvalidSettings(format!(
                    "{name} range must be finite ({min}..{max})"
                )));
            }
            if min < 0.0 {
                return Err(PyreError::InvalidSettings(format!(
                    "min_{name} must not be negative ({min})"
                )));
            }
            if min > max {
                return Err(PyreError::InvalidSettings(format!(
                    "min_{name} ({min}) is larger than max_{name} ({max})"
                )));
            }
        }

        if self.max_energy <= 0.0 {
            return Err(PyreError::InvalidSettings(
                "max_energy must be larger than zero".to_string(),
            ));
        }
        if !self.velocity.is_finite() || !self.color.is_finite() {
            return Err(PyreError::InvalidSettings(
                "velocity and color must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ParticleEmitterSettings::default().validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let settings =
            ParticleEmitterSettings::from_json_str(r#"{ "min_energy": 0.5, "max_energy": 0.5 }"#)
                .unwrap();
        assert!((settings.min_energy - 0.5).abs() < 1e-6);
        assert!((settings.max_size - ParticleEmitterSettings::default().max_size).abs() < 1e-6);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let settings = ParticleEmitterSettings {
            min_energy: 3.0,
            max_energy: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(PyreError::InvalidSettings(_))
        ));
    }

    #[test]
    fn zero_lifetime_is_rejected() {
        let settings = ParticleEmitterSettings {
            min_energy: 0.0,
            max_energy: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            ParticleEmitterSettings::from_json_str("{ not json"),
            Err(PyreError::JsonError(_))
        ));
    }
}
