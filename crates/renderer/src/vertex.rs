//! Vertex and instance layouts shared with the GPU backend.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use sim_core::TransformRaw;

/// Standard vertex with position, normal, and UV coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}

/// Instance data for instanced rendering: model matrix plus color tint.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct InstanceData {
    pub transform: TransformRaw,
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn new(model: Mat4, tint: Option<Vec3>) -> Self {
        let color = match tint {
            Some(t) => [t.x, t.y, t.z, 1.0],
            None => [1.0, 1.0, 1.0, 1.0],
        };
        Self {
            transform: TransformRaw::from_matrix(model),
            color,
        }
    }
}

impl Default for InstanceData {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, None)
    }
}
