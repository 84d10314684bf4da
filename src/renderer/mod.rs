//! Renderer hand-off
//!
//! Everything here is plain data for a wgpu renderer: the cube template,
//! vertex layout, rebuilt vertex/index arrays and per-block model uniforms.
//! Device, pipeline and shader setup live with the host.

pub mod cube;
pub mod mesh;
pub mod transform;
pub mod vertex;

pub use mesh::{DrawRange, IndexMode, MeshSnapshot, build_mesh};
pub use transform::ModelUniform;
pub use vertex::{INDEX_FORMAT, Vertex};
