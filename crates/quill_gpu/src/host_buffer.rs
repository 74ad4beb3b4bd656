//! Transient per-frame buffer storage
//!
//! `HostBuffer` is a CPU-side arena that uniforms and vertex streams are
//! appended into while a pass is being encoded. The backend uploads it once
//! and resolves each [`BufferView`] against the uploaded copy.

use bytemuck::Pod;

/// Minimum offset alignment for uniform bindings
pub const UNIFORM_ALIGNMENT: usize = 256;

/// A byte range inside a [`HostBuffer`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferView {
    pub offset: usize,
    pub length: usize,
}

impl BufferView {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }
}

#[derive(Clone, Debug, Default)]
pub struct HostBuffer {
    data: Vec<u8>,
}

impl HostBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Forget all allocations, keeping capacity for the next frame.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    pub fn bytes(&self, view: BufferView) -> Option<&[u8]> {
        self.data.get(view.range())
    }

    pub fn emplace_uniform<T: Pod>(&mut self, uniform: &T) -> BufferView {
        self.emplace(bytemuck::bytes_of(uniform), UNIFORM_ALIGNMENT)
    }

    pub fn emplace_vertices<T: Pod>(&mut self, vertices: &[T]) -> BufferView {
        self.emplace(
            bytemuck::cast_slice(vertices),
            std::mem::align_of::<T>().max(4),
        )
    }

    fn emplace(&mut self, bytes: &[u8], alignment: usize) -> BufferView {
        let offset = self.data.len().next_multiple_of(alignment);
        self.data.resize(offset, 0);
        self.data.extend_from_slice(bytes);
        BufferView {
            offset,
            length: bytes.len(),
        }
    }
}

/// A vertex stream bound to one draw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexBuffer {
    pub view: BufferView,
    pub vertex_count: usize,
}

/// Accumulates typed vertices before they are written into a [`HostBuffer`]
#[derive(Clone, Debug)]
pub struct VertexBufferBuilder<V> {
    vertices: Vec<V>,
}

impl<V> Default for VertexBufferBuilder<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<V: Pod> VertexBufferBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    pub fn has_vertices(&self) -> bool {
        !self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn create_vertex_buffer(&self, buffer: &mut HostBuffer) -> VertexBuffer {
        VertexBuffer {
            view: buffer.emplace_vertices(&self.vertices),
            vertex_count: self.vertices.len(),
        }
    }
}
