use glam::{Mat4, Quat, Vec3};

pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

/// A bone transform split into its scale, rotation and translation parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonePose {
    pub scale: Vec3,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl BonePose {
    pub const IDENTITY: Self = Self {
        scale: Vec3::ONE,
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Decomposes a bone matrix. Shear is lost.
    #[must_use]
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            scale,
            rotation,
            translation,
        }
    }

    /// Recomposes the pose: scale first, then rotation, then translation.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for BonePose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolatable for BonePose {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        Self {
            scale: Vec3::interpolate_linear(start.scale, end.scale, t),
            rotation: Quat::interpolate_linear(start.rotation, end.rotation, t),
            translation: Vec3::interpolate_linear(start.translation, end.translation, t),
        }
    }
}

/// Blends two bone matrices by decomposing, interpolating and recomposing them.
#[must_use]
pub fn blend_bone_transform(a: &Mat4, b: &Mat4, t: f32) -> Mat4 {
    BonePose::interpolate_linear(BonePose::from_matrix(a), BonePose::from_matrix(b), t).to_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_round_trips_through_matrix() {
        let pose = BonePose {
            scale: Vec3::new(2.0, 2.0, 2.0),
            rotation: Quat::from_rotation_z(0.3),
            translation: Vec3::new(1.0, -2.0, 3.0),
        };
        let back = BonePose::from_matrix(&pose.to_matrix());
        assert!(back.scale.abs_diff_eq(pose.scale, 1e-5));
        assert!(back.translation.abs_diff_eq(pose.translation, 1e-5));
        assert!(back.rotation.angle_between(pose.rotation) < 1e-4);
    }

    #[test]
    fn blend_endpoints_match_inputs() {
        let a = Mat4::from_translation(Vec3::X);
        let b = Mat4::from_translation(Vec3::Y * 4.0);
        assert!(blend_bone_transform(&a, &b, 0.0).abs_diff_eq(a, 1e-5));
        assert!(blend_bone_transform(&a, &b, 1.0).abs_diff_eq(b, 1e-5));
    }
}
