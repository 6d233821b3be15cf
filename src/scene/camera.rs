use glam::{Affine3A, Mat4};

/// View matrices of whatever camera the frame is rendered from.
pub trait CameraMatrices {
    fn view_matrix(&self) -> Mat4;

    fn view_projection_matrix(&self) -> Mat4;

    fn view_inverse_matrix(&self) -> Mat4 {
        self.view_matrix().inverse()
    }
}

/// Minimal perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    world_matrix: Affine3A,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,
}

impl Camera {
    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,

            world_matrix: Affine3A::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
        };

        cam.update_projection_matrix();
        cam
    }

    pub fn update_projection_matrix(&mut self) {
        // wgpu clip space: depth in 0..1
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    pub fn update_view_projection(&mut self, world_transform: &Affine3A) {
        self.world_matrix = *world_transform;
        self.view_matrix = Mat4::from(*world_transform).inverse();
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }
}

impl CameraMatrices for Camera {
    fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    fn view_projection_matrix(&self) -> Mat4 {
        self.view_projection_matrix
    }

    fn view_inverse_matrix(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }
}
