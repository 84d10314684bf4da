//! Block store → GPU-ready vertex and index arrays
//!
//! A full rebuild runs on every structural change to the store. Block vertices
//! are copied untransformed; the renderer applies each block's model matrix
//! (see `transform`) when drawing its range.

use serde::{Deserialize, Serialize};

use super::cube::{CUBE_INDEX_COUNT, CUBE_INDICES, CUBE_VERTEX_COUNT};
use super::vertex::Vertex;
use crate::sim::BlockStore;

/// How per-block indices are numbered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMode {
    /// `8 * block + corner`: every index addresses its own block's vertices
    #[default]
    Absolute,
    /// `block + corner`: the legacy renderer's numbering. Indices of
    /// different blocks overlap, so only the first 36 are meaningful and each
    /// block is drawn from index 0 with a base vertex of `8 * block`.
    Legacy,
}

/// Parameters for one block's indexed draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub first_index: u32,
    pub index_count: u32,
    pub base_vertex: i32,
}

impl DrawRange {
    /// Index range suitable for `RenderPass::draw_indexed`
    pub fn indices(&self) -> std::ops::Range<u32> {
        self.first_index..self.first_index + self.index_count
    }
}

/// Output of one mesh build. Offsets travel with the arrays they index into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshSnapshot {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// One entry per block, in store order
    pub draws: Vec<DrawRange>,
    pub index_mode: IndexMode,
}

impl MeshSnapshot {
    pub fn block_count(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Rebuild the whole mesh from the store, writing each block's index offset
pub fn build_mesh(store: &mut BlockStore, mode: IndexMode) -> MeshSnapshot {
    let count = store.len();
    let mut mesh = MeshSnapshot {
        vertices: Vec::with_capacity(count * CUBE_VERTEX_COUNT),
        indices: Vec::with_capacity(count * CUBE_INDEX_COUNT),
        draws: Vec::with_capacity(count),
        index_mode: mode,
    };

    for (i, block) in store.iter_mut().enumerate() {
        let i = i as u32;
        let vertex_base = i * CUBE_VERTEX_COUNT as u32;

        mesh.vertices.extend_from_slice(&block.vertices);

        let index_base = match mode {
            IndexMode::Absolute => vertex_base,
            IndexMode::Legacy => i,
        };
        mesh.indices
            .extend(CUBE_INDICES.iter().map(|&corner| index_base + corner));

        mesh.draws.push(match mode {
            IndexMode::Absolute => DrawRange {
                first_index: i * CUBE_INDEX_COUNT as u32,
                index_count: CUBE_INDEX_COUNT as u32,
                base_vertex: 0,
            },
            IndexMode::Legacy => DrawRange {
                first_index: 0,
                index_count: CUBE_INDEX_COUNT as u32,
                base_vertex: vertex_base as i32,
            },
        });

        block.set_index_offset(vertex_base);
    }

    log::debug!(
        "Mesh rebuilt: {} blocks, {} vertices, {} indices",
        count,
        mesh.vertices.len(),
        mesh.indices.len()
    );

    mesh
}
