//! Particle Vertex Streaming
//!
//! The emitter rewrites its vertex data every frame. Writes go through a
//! scoped mapping, mirroring a `WRITE_DISCARD` map of a dynamic vertex buffer:
//!
//! 1. [`ParticleVertexBuffer::map_write_discard`] opens an exclusive write
//!    window and discards the previous contents.
//! 2. Records are pushed from offset 0 through the returned [`MappedVertices`].
//! 3. Dropping the mapping commits the record count and bumps the version,
//!    on every exit path.
//!
//! The draw step then reads [`ParticleVertexBuffer::vertices`] (or uploads it
//! with [`GpuParticleBuffer::sync`]) and submits exactly `len()` vertices.

use crate::particles::vertex::ParticleVertex;

/// CPU side of the dynamic particle vertex buffer, fixed capacity.
#[derive(Debug, Clone)]
pub struct ParticleVertexBuffer {
    label: String,
    records: Vec<ParticleVertex>,
    len: usize,
    version: u64,
}

impl ParticleVertexBuffer {
    #[must_use]
    pub fn with_capacity(capacity: usize, label: Option<&str>) -> Self {
        Self {
            label: label.unwrap_or("ParticleVertexBuffer").to_string(),
            records: vec![ParticleVertex::default(); capacity],
            len: 0,
            version: 0,
        }
    }

    /// Opens the write window. Previous contents are discarded.
    pub fn map_write_discard(&mut self) -> MappedVertices<'_> {
        MappedVertices {
            records: &mut self.records,
            written: 0,
            committed_len: &mut self.len,
            version: &mut self.version,
        }
    }

    /// Records written by the last mapping.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.records[..self.len]
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Size of the full buffer in bytes, as the GPU side must allocate it.
    #[must_use]
    pub fn capacity_bytes(&self) -> u64 {
        (self.capacity() * std::mem::size_of::<ParticleVertex>()) as u64
    }

    /// Incremented every time a mapping is released.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Exclusive write access to a [`ParticleVertexBuffer`].
///
/// Commits the number of written records and bumps the buffer version when dropped.
pub struct MappedVertices<'a> {
    records: &'a mut [ParticleVertex],
    written: usize,
    committed_len: &'a mut usize,
    version: &'a mut u64,
}

impl MappedVertices<'_> {
    /// Appends a record. Returns `false` once the buffer is full.
    pub fn push(&mut self, vertex: ParticleVertex) -> bool {
        let Some(slot) = self.records.get_mut(self.written) else {
            return false;
        };
        *slot = vertex;
        self.written += 1;
        true
    }

    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }
}

impl Drop for MappedVertices<'_> {
    fn drop(&mut self) {
        *self.committed_len = self.written;
        *self.version = self.version.wrapping_add(1);
    }
}

/// GPU vertex buffer mirroring a [`ParticleVertexBuffer`].
///
/// The buffer is sized for the whole pool once; each [`sync`](Self::sync)
/// uploads only the live records, and only when the CPU side changed.
/// Dropping it releases the GPU allocation.
#[derive(Debug)]
pub struct GpuParticleBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    last_version: Option<u64>,
}

impl GpuParticleBuffer {
    #[must_use]
    pub fn new(device: &wgpu::Device, source: &ParticleVertexBuffer) -> Self {
        let size = source
            .capacity_bytes()
            .max(std::mem::size_of::<ParticleVertex>() as u64);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(source.label()),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            vertex_count: 0,
            last_version: None,
        }
    }

    /// Uploads the live records if the CPU buffer was rewritten since the last sync.
    pub fn sync(&mut self, queue: &wgpu::Queue, source: &ParticleVertexBuffer) {
        if self.last_version == Some(source.version()) {
            return;
        }

        if !source.is_empty() {
            queue.write_buffer(&self.buffer, 0, source.as_bytes());
        }
        self.vertex_count = source.len() as u32;
        self.last_version = Some(source.version());
    }

    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of vertices the draw call must submit.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}
