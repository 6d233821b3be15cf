use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::scene::CameraMatrices;

/// Per-draw constants of the particle shader.
///
/// Particles are already in world space, so only the view-projection is
/// needed to place them; the inverse view orients the point sprites
/// towards the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleDrawUniforms {
    pub view_projection: Mat4,
    pub view_inverse: Mat4,
}

impl Default for ParticleDrawUniforms {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            view_inverse: Mat4::IDENTITY,
        }
    }
}

impl ParticleDrawUniforms {
    #[must_use]
    pub fn from_camera(camera: &impl CameraMatrices) -> Self {
        Self {
            view_projection: camera.view_projection_matrix(),
            view_inverse: camera.view_inverse_matrix(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
