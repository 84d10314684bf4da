//! Unit cube geometry template
//!
//! Corner `n` has bit 2 = +x, bit 1 = +y, bit 0 = +z, and its color encodes
//! the same bits so each corner is identifiable on screen.

use super::vertex::Vertex;

/// Vertices per block
pub const CUBE_VERTEX_COUNT: usize = 8;

/// Indices per block (12 triangles)
pub const CUBE_INDEX_COUNT: usize = 36;

/// The 8 corners of a unit cube centered on the origin
pub const CUBE_VERTICES: [Vertex; CUBE_VERTEX_COUNT] = [
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0, 1.0]),
];

/// Triangle list over `CUBE_VERTICES`, two triangles per face
pub const CUBE_INDICES: [u32; CUBE_INDEX_COUNT] = [
    0, 2, 1, 1, 2, 3, // -x
    4, 5, 6, 5, 7, 6, // +x
    0, 1, 5, 0, 5, 4, // -y
    2, 6, 7, 2, 7, 3, // +y
    0, 4, 6, 0, 6, 2, // -z
    1, 3, 7, 1, 7, 5, // +z
];
