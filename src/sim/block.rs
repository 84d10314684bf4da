//! Block entity: a single approaching cuboid

use glam::Vec3;
use crate::renderer::cube::{CUBE_VERTEX_COUNT, CUBE_VERTICES};
use crate::renderer::vertex::Vertex;

/// Block classification, interpreted by the tap rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockClass {
    #[default]
    Good,
    Bad,
    Dead,
}

/// A live block
#[derive(Debug, Clone)]
pub struct Block {
    /// World-space center
    pub position: Vec3,
    /// Displacement per second (negative z approaches the viewer)
    pub velocity: Vec3,
    /// Spin about the y axis (radians), shared by every block in a frame
    pub rotation: f32,
    /// Uniform scale
    pub size: f32,
    pub class: BlockClass,
    /// Local, unscaled corner vertices copied from the cube template
    pub vertices: [Vertex; CUBE_VERTEX_COUNT],
    /// First vertex of this block in the last mesh build; `None` while stale
    index_offset: Option<u32>,
}

impl Block {
    pub fn new(position: Vec3, velocity: Vec3, rotation: f32, class: BlockClass, size: f32) -> Self {
        Self {
            position,
            velocity,
            rotation,
            size,
            class,
            vertices: CUBE_VERTICES,
            index_offset: None,
        }
    }

    /// Offset assigned by the most recent mesh build, if no mutation happened since
    #[inline]
    pub fn index_offset(&self) -> Option<u32> {
        self.index_offset
    }

    pub(crate) fn set_index_offset(&mut self, offset: u32) {
        self.index_offset = Some(offset);
    }

    pub(crate) fn invalidate_offset(&mut self) {
        self.index_offset = None;
    }

    /// Apply one frame: take the shared rotation and move by velocity * dt
    pub fn advance(&mut self, dt: f32, radians: f32) {
        self.rotation = radians;
        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_copies_template() {
        let block = Block::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 0.0, BlockClass::Bad, 1.0);
        assert_eq!(block.vertices, CUBE_VERTICES);
        assert_eq!(block.class, BlockClass::Bad);
        assert_eq!(block.index_offset(), None);
    }

    #[test]
    fn test_advance_moves_and_rotates() {
        let mut block = Block::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0), 0.0, BlockClass::Good, 1.0);
        block.advance(0.25, 1.5);
        assert!((block.position.z + 0.5).abs() < 1e-6);
        assert_eq!(block.rotation, 1.5);
        // Vertices stay local
        assert_eq!(block.vertices, CUBE_VERTICES);
    }
}
