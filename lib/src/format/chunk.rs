use binrw::binrw;

/// Byte size of an on-disk chunk header. A chunk's `len` field counts the
/// header itself, so the payload of an unhandled chunk spans `len - 6` bytes.
pub const CHUNK_HEADER_SIZE: u32 = 6;

// Top-level container
pub const K_CHUNK_MAIN: u16 = 0x4D4D;
// 3D editor container
pub const K_CHUNK_EDIT3D: u16 = 0x3D3D;
// Named object block
pub const K_CHUNK_OBJECT: u16 = 0x4000;
// Triangle mesh container
pub const K_CHUNK_TRIMESH: u16 = 0x4100;
// Vertex positions
pub const K_CHUNK_VERTEX_LIST: u16 = 0x4110;
// Triangle corner indices
pub const K_CHUNK_FACE_LIST: u16 = 0x4120;
// Texture coordinates
pub const K_CHUNK_TEXCOORD_LIST: u16 = 0x4140;

#[binrw]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ChunkHeader {
    pub id: u16,
    pub len: u32,
}

impl ChunkHeader {
    /// Payload length remaining after the header has been consumed.
    #[inline]
    pub fn data_len(&self) -> u32 { self.len.saturating_sub(CHUNK_HEADER_SIZE) }
}

/// Chunk identifier space. Every kind the decoder does not model falls into
/// `Unknown` and is skipped by length, which keeps the walk forward-compatible
/// with chunk kinds that were never enumerated (materials, lights, cameras,
/// smoothing groups, keyframes, ...).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChunkId {
    Main,
    Edit3d,
    ObjectBlock,
    TriMesh,
    VertexList,
    FaceList,
    TexCoordList,
    Unknown(u16),
}

impl From<u16> for ChunkId {
    fn from(id: u16) -> Self {
        match id {
            K_CHUNK_MAIN => ChunkId::Main,
            K_CHUNK_EDIT3D => ChunkId::Edit3d,
            K_CHUNK_OBJECT => ChunkId::ObjectBlock,
            K_CHUNK_TRIMESH => ChunkId::TriMesh,
            K_CHUNK_VERTEX_LIST => ChunkId::VertexList,
            K_CHUNK_FACE_LIST => ChunkId::FaceList,
            K_CHUNK_TEXCOORD_LIST => ChunkId::TexCoordList,
            id => ChunkId::Unknown(id),
        }
    }
}
