//! Transform types and model-matrix assembly.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform at `position` facing `yaw_deg` around the Y axis.
    pub fn from_position_yaw_deg(position: Vec3, yaw_deg: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw_deg.to_radians()),
            ..Default::default()
        }
    }

    /// Create the model matrix for this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// How the model matrix for a drawn entity is assembled.
///
/// One constructor covers every placement the draw layer needs: scaled
/// city geometry with a yaw, and streaks oriented along a flight
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformSpec {
    /// Same scale on all three axes, yaw rotation in degrees.
    UniformScale { scale: f32, yaw_deg: f32 },
    /// Independent axis scales, yaw rotation in degrees.
    PerAxisScale { scale: Vec3, yaw_deg: f32 },
    /// Model forward axis (-Z) aligned with `dir`.
    DirectionAligned { dir: Vec3, scale: Vec3 },
}

impl TransformSpec {
    /// Past this |dot(dir, up)| the alignment up vector flips to +X so the
    /// basis stays well formed for near-vertical directions.
    const UP_PARALLEL_LIMIT: f32 = 0.95;

    /// Build the model matrix for an entity at `position`.
    pub fn matrix(&self, position: Vec3) -> Mat4 {
        match *self {
            TransformSpec::UniformScale { scale, yaw_deg } => {
                Mat4::from_translation(position)
                    * Mat4::from_rotation_y(yaw_deg.to_radians())
                    * Mat4::from_scale(Vec3::splat(scale))
            }
            TransformSpec::PerAxisScale { scale, yaw_deg } => {
                Mat4::from_translation(position)
                    * Mat4::from_rotation_y(yaw_deg.to_radians())
                    * Mat4::from_scale(scale)
            }
            TransformSpec::DirectionAligned { dir, scale } => {
                let dir = dir.normalize_or_zero();
                if dir == Vec3::ZERO {
                    return Mat4::from_translation(position) * Mat4::from_scale(scale);
                }
                let up = if dir.dot(Vec3::Y).abs() > Self::UP_PARALLEL_LIMIT {
                    Vec3::X
                } else {
                    Vec3::Y
                };
                let rotation =
                    Quat::from_mat4(&Mat4::look_at_rh(Vec3::ZERO, dir, up)).inverse();
                Mat4::from_translation(position)
                    * Mat4::from_quat(rotation)
                    * Mat4::from_scale(scale)
            }
        }
    }
}

/// Raw transform data for GPU upload (instance data).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
}

impl TransformRaw {
    pub fn from_matrix(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

impl From<&Transform> for TransformRaw {
    fn from(transform: &Transform) -> Self {
        Self::from_matrix(transform.to_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(m: Mat4) -> bool {
        m.to_cols_array().iter().all(|v| v.is_finite())
    }

    #[test]
    fn uniform_scale_places_and_scales() {
        let m = TransformSpec::UniformScale {
            scale: 2.0,
            yaw_deg: 0.0,
        }
        .matrix(Vec3::new(1.0, 2.0, 3.0));
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(3.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn direction_aligned_points_forward_axis_along_dir() {
        let dir = Vec3::new(1.0, 0.0, 1.0).normalize();
        let m = TransformSpec::DirectionAligned {
            dir,
            scale: Vec3::ONE,
        }
        .matrix(Vec3::ZERO);
        let fwd = m.transform_vector3(-Vec3::Z);
        assert!((fwd - dir).length() < 1e-5);
    }

    #[test]
    fn near_vertical_direction_stays_finite() {
        let m = TransformSpec::DirectionAligned {
            dir: Vec3::new(0.001, 1.0, 0.0),
            scale: Vec3::new(0.5, 0.5, 6.0),
        }
        .matrix(Vec3::new(0.0, 100.0, 0.0));
        assert!(finite(m));
        let m = TransformSpec::DirectionAligned {
            dir: -Vec3::Y,
            scale: Vec3::ONE,
        }
        .matrix(Vec3::ZERO);
        assert!(finite(m));
    }

    #[test]
    fn zero_direction_degrades_to_unrotated() {
        let m = TransformSpec::DirectionAligned {
            dir: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        }
        .matrix(Vec3::new(5.0, 0.0, 0.0));
        assert!(finite(m));
        let p = m.transform_point3(Vec3::new(0.0, 0.0, 1.0));
        assert!((p - Vec3::new(5.0, 0.0, 2.0)).length() < 1e-5);
    }
}
