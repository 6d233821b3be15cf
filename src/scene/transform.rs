use glam::{Affine3A, Mat4, Quat, Vec3};

/// Source of the world position particles are spawned around.
pub trait WorldPosition {
    fn world_position(&self) -> Vec3;
}

impl WorldPosition for Vec3 {
    fn world_position(&self) -> Vec3 {
        *self
    }
}

impl WorldPosition for Affine3A {
    fn world_position(&self) -> Vec3 {
        self.translation.into()
    }
}

impl WorldPosition for Mat4 {
    fn world_position(&self) -> Vec3 {
        self.w_axis.truncate()
    }
}

/// Position, rotation and scale of an entity plus its resolved world matrix.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    world_matrix: Affine3A,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            world_matrix: Affine3A::IDENTITY,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Resolves the world matrix against the parent's (`None` for roots).
    pub fn update_world_matrix(&mut self, parent: Option<&Affine3A>) {
        let local = self.local_matrix();
        self.world_matrix = match parent {
            Some(parent) => *parent * local,
            None => local,
        };
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldPosition for Transform {
    /// Position as of the last [`Transform::update_world_matrix`].
    fn world_position(&self) -> Vec3 {
        self.world_matrix.translation.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_position_follows_parent() {
        let parent = Affine3A::from_translation(Vec3::new(0.0, 5.0, 0.0));
        let mut transform = Transform::from_position(Vec3::X);
        transform.update_world_matrix(Some(&parent));
        assert!(transform.world_position().abs_diff_eq(Vec3::new(1.0, 5.0, 0.0), 1e-6));
    }

    #[test]
    fn world_position_waits_for_update() {
        let mut transform = Transform::new();
        transform.position = Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(transform.world_position(), Vec3::ZERO);

        transform.update_world_matrix(None);
        assert!(transform.world_position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
    }
}
