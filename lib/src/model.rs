use bytemuck::{Pod, Zeroable};

use crate::format::{Vec2, Vec3};

/// Interleaved vertex layout shared by every decoded mesh: position,
/// smoothed normal, texture coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: Vec3,
    pub nor: Vec3,
    pub uv: Vec2,
}

/// Append-only typed buffer backing a model's shared vertex/index storage.
///
/// Growing may reallocate the backing storage, so any view taken before a
/// [`grow_to`](GBuffer::grow_to) must be re-derived afterwards; the borrow
/// checker upholds what the loaders have to honor by convention.
#[derive(Clone, Debug, Default)]
pub struct GBuffer<T: Pod> {
    data: Vec<T>,
}

impl<T: Pod> GBuffer<T> {
    pub fn new() -> Self { Self { data: Vec::new() } }

    /// Current size in elements.
    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Grows the buffer to `new_len` elements, preserving existing content
    /// and zero-filling the tail. Never shrinks.
    pub fn grow_to(&mut self, new_len: usize) {
        if new_len > self.data.len() {
            self.data.resize(new_len, T::zeroed());
        }
    }

    pub fn as_slice(&self) -> &[T] { &self.data }

    /// Mutable view of every element from `start` to the current end.
    pub fn tail_mut(&mut self, start: usize) -> &mut [T] { &mut self.data[start..] }

    /// Raw byte view, e.g. for GPU upload.
    pub fn as_bytes(&self) -> &[u8] { bytemuck::cast_slice(&self.data) }
}

/// One decoded object's slice of the model's shared buffers, in element
/// units: `index_count` indices starting at `index_start`, referencing
/// vertices in `[vertex_start, vertex_start + vertex_count)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Mesh {
    pub vertex_start: usize,
    pub vertex_count: usize,
    pub index_start: usize,
    pub index_count: usize,
}

/// A model owns the vertex and index storage that its meshes share. Loaders
/// only ever append; on a failed load the buffers are left partially
/// appended and the whole model should be discarded.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub vertices: GBuffer<Vertex>,
    pub indices: GBuffer<u16>,
    pub meshes: Vec<Mesh>,
}

impl Model {
    pub fn new() -> Self { Self::default() }

    /// Registers a decoded mesh descriptor on this model.
    pub fn create_mesh(&mut self, mesh: Mesh) -> Mesh {
        self.meshes.push(mesh);
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_preserves_content() {
        let mut buf: GBuffer<u16> = GBuffer::new();
        buf.grow_to(3);
        buf.tail_mut(0).copy_from_slice(&[1, 2, 3]);
        buf.grow_to(5);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 0, 0]);
    }

    #[test]
    fn grow_never_shrinks() {
        let mut buf: GBuffer<u16> = GBuffer::new();
        buf.grow_to(4);
        buf.grow_to(2);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn byte_view_matches_element_size() {
        let mut buf: GBuffer<Vertex> = GBuffer::new();
        buf.grow_to(3);
        assert_eq!(buf.as_bytes().len(), 3 * std::mem::size_of::<Vertex>());
    }

    #[test]
    fn vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn create_mesh_records_descriptor() {
        let mut model = Model::new();
        let mesh =
            model.create_mesh(Mesh { vertex_start: 0, vertex_count: 8, index_start: 0, index_count: 36 });
        assert_eq!(model.meshes, vec![mesh]);
    }
}
