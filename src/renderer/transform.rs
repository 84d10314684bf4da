//! Per-block model transform handed to the renderer

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::sim::{Block, BlockStore};

/// Model matrix uniform (column-major, matches WGSL `mat4x4<f32>`)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    /// Scale, spin about y, then translate to the block's position
    pub fn for_block(block: &Block) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(block.size),
            Quat::from_rotation_y(block.rotation),
            block.position,
        );
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    /// One uniform per block, in store (and therefore draw range) order
    pub fn for_store(store: &BlockStore) -> Vec<Self> {
        store.iter().map(Self::for_block).collect()
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}
