//! Core types shared across the skyring simulation crates.
//!
//! This crate provides the foundation the flight, world, and draw layers
//! build on:
//! - Transforms and model-matrix assembly
//! - Frame timing for the fixed-step loop
//! - Small geometry helpers (flat distance, sphere tests, smoothing)

pub mod math;
pub mod time;
pub mod transform;

pub use math::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
