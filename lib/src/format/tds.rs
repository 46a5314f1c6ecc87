use std::io::{Read, Seek, SeekFrom};

use anyhow::{ensure, Result};
use binrw::BinReaderExt;

use crate::{
    format::{
        chunk::{ChunkHeader, ChunkId},
        Vec3,
    },
    model::{Mesh, Model},
};

// Object name length including the terminator
pub const NAME_MAX: usize = 32;

/// Decodes a 3D Studio (.3ds) chunk stream into `model`, appending one
/// object's geometry to the model's shared vertex/index buffers and
/// registering a mesh descriptor for the appended range.
///
/// The stream is consumed end-to-end. Chunk kinds the decoder does not
/// handle are skipped by their recorded length; handled kinds are trusted
/// by item count. Per-vertex normals are accumulated from the unnormalized
/// cross product of each referencing face, so larger and sharper triangles
/// weigh more in the smoothed result, then normalized once at the end.
///
/// On error the buffers may hold partial data; discard the model.
pub fn load_mesh<R: Read + Seek>(model: &mut Model, reader: &mut R) -> Result<Mesh> {
    let total_len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let mut base_vertex = 0usize;
    let mut base_index = 0usize;
    let mut num_vertices = 0usize;
    let mut num_indices = 0usize;
    let mut seen_vertices = false;
    let mut seen_faces = false;

    while reader.stream_position()? < total_len {
        let header: ChunkHeader = reader.read_le()?;
        log::debug!("chunk id {:#06x}, len {}", header.id, header.len);

        match ChunkId::from(header.id) {
            // Containers carry no payload of their own; their children are
            // the chunks that follow.
            ChunkId::Main | ChunkId::Edit3d | ChunkId::TriMesh => {}
            ChunkId::ObjectBlock => {
                // The name has no length prefix and no skip follows it, so
                // it must be consumed byte-exact to stay in sync.
                let name = read_object_name(reader)?;
                log::debug!("object name: {name}");
            }
            ChunkId::VertexList => {
                ensure!(!seen_vertices, "multiple meshes per model not currently supported");
                seen_vertices = true;

                let count: u16 = reader.read_le()?;
                num_vertices = count as usize;
                base_vertex = model.vertices.len();
                ensure!(
                    base_vertex + num_vertices <= u16::MAX as usize + 1,
                    "vertex range {}..{} does not fit 16-bit indices",
                    base_vertex,
                    base_vertex + num_vertices
                );

                model.vertices.grow_to(base_vertex + num_vertices);
                let vertex_buf = model.vertices.tail_mut(base_vertex);
                for vertex in vertex_buf.iter_mut() {
                    vertex.pos = reader.read_le()?;
                    vertex.nor = Vec3::ZERO;
                }
            }
            ChunkId::FaceList => {
                ensure!(!seen_faces, "face list specified more than once, not supported");
                seen_faces = true;

                let count: u16 = reader.read_le()?;
                num_indices = count as usize * 3;
                base_index = model.indices.len();
                model.indices.grow_to(base_index + num_indices);

                // Both views re-derived after growth; never cached across it
                let vertex_buf = model.vertices.tail_mut(base_vertex);
                let index_buf = model.indices.tail_mut(base_index);
                for x in 0..count as usize {
                    // Three corner indices plus a flags word we discard
                    let corners: [u16; 4] = reader.read_le()?;
                    let (a, b, c) =
                        (corners[0] as usize, corners[1] as usize, corners[2] as usize);
                    ensure!(
                        a < num_vertices && b < num_vertices && c < num_vertices,
                        "face {x} references a vertex outside 0..{num_vertices}"
                    );

                    // Face normal from the unrebased positions; left
                    // unnormalized so it carries the area/angle weight
                    let pa = vertex_buf[a].pos;
                    let nor = (vertex_buf[b].pos - pa).cross(vertex_buf[c].pos - pa);

                    index_buf[x * 3] = corners[0] + base_vertex as u16;
                    index_buf[x * 3 + 1] = corners[1] + base_vertex as u16;
                    index_buf[x * 3 + 2] = corners[2] + base_vertex as u16;
                    vertex_buf[a].nor += nor;
                    vertex_buf[b].nor += nor;
                    vertex_buf[c].nor += nor;
                }
            }
            ChunkId::TexCoordList => {
                let count: u16 = reader.read_le()?;
                ensure!(seen_vertices, "texture coordinates specified before vertex list");
                ensure!(
                    count as usize <= num_vertices,
                    "{count} texture coordinates for {num_vertices} vertices"
                );

                let vertex_buf = model.vertices.tail_mut(base_vertex);
                for vertex in vertex_buf[..count as usize].iter_mut() {
                    vertex.uv = reader.read_le()?;
                }
            }
            ChunkId::Unknown(id) => {
                log::debug!("skipping unknown chunk {id:#06x}");
                reader.seek(SeekFrom::Current(header.data_len() as i64))?;
            }
        }
    }

    ensure!(seen_faces, "found no face list in 3ds file");
    ensure!(seen_vertices, "found no vertex list in 3ds file");

    for vertex in model.vertices.tail_mut(base_vertex) {
        vertex.nor.normalize();
    }

    Ok(model.create_mesh(Mesh {
        vertex_start: base_vertex,
        vertex_count: num_vertices,
        index_start: base_index,
        index_count: num_indices,
    }))
}

/// Reads a null-terminated object name, consuming at most `NAME_MAX - 1`
/// bytes (terminator included when one is seen).
fn read_object_name<R: Read>(reader: &mut R) -> Result<String> {
    let mut name = [0u8; NAME_MAX];
    let mut len = 0;
    for x in 0..NAME_MAX - 1 {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        if byte[0] == 0 {
            break;
        }
        name[x] = byte[0];
        len = x + 1;
    }
    Ok(String::from_utf8_lossy(&name[..len]).into_owned())
}
