use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// One point sprite as consumed by the particle vertex shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    /// Roll of the sprite around the view axis, in radians.
    pub rotation: f32,
}

impl ParticleVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4, 3 => Float32];

    #[must_use]
    pub fn new(position: Vec3, size: f32, color: Vec4, rotation: f32) -> Self {
        Self {
            position: position.to_array(),
            size,
            color: color.to_array(),
            rotation,
        }
    }

    /// Vertex buffer layout for a point-list draw of the particle buffer.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Vec4 {
        Vec4::from_array(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct_size() {
        let layout = ParticleVertex::layout();
        assert_eq!(layout.array_stride, 36);
        assert_eq!(layout.attributes.len(), 4);
        assert_eq!(layout.attributes[2].offset, 16);
        assert_eq!(layout.attributes[3].offset, 32);
    }
}
