//! Renderer-facing contract for skyring.
//!
//! This crate owns the CPU side of drawing: mesh and texture registries,
//! vertex and instance layouts, camera matrices, and the per-frame draw
//! lists the simulation emits. A GPU backend consumes these types; none
//! of the simulation crates ever touch one.

pub mod camera;
pub mod draw;
pub mod error;
pub mod mesh;
pub mod texture;
pub mod vertex;

pub use camera::*;
pub use draw::*;
pub use error::*;
pub use mesh::*;
pub use texture::*;
pub use vertex::*;
