//! Mesh data, primitive generation, and the OBJ-backed mesh registry.

use crate::error::AssetError;
use crate::vertex::Vertex;
use glam::{Vec2, Vec3};
use std::path::Path;

/// Handle into the [`MeshLibrary`]. Id 0 is always the empty mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MeshId(pub u32);

impl MeshId {
    /// The empty placeholder mesh. Drawing it renders nothing.
    pub const EMPTY: MeshId = MeshId(0);
}

/// Mesh data before GPU upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Create a unit cube centered at origin.
    pub fn cube() -> Self {
        let vertices = vec![
            // Front face
            Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
            Vertex::new([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
            Vertex::new([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
            // Back face
            Vertex::new([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
            Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
            Vertex::new([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
            Vertex::new([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
            // Top face
            Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
            Vertex::new([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
            Vertex::new([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
            Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
            // Bottom face
            Vertex::new([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
            Vertex::new([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
            Vertex::new([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
            Vertex::new([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
            // Right face
            Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
            Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
            Vertex::new([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
            Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
            // Left face
            Vertex::new([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
            Vertex::new([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
            Vertex::new([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
            Vertex::new([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        ];

        let mut indices = Vec::with_capacity(36);
        for face in 0..6u32 {
            let base = face * 4;
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// Create a flat XZ plane of the given half extent.
    pub fn plane(size: f32) -> Self {
        let vertices = vec![
            Vertex::new([-size, 0.0, -size], [0.0, 1.0, 0.0], [0.0, 0.0]),
            Vertex::new([size, 0.0, -size], [0.0, 1.0, 0.0], [1.0, 0.0]),
            Vertex::new([size, 0.0, size], [0.0, 1.0, 0.0], [1.0, 1.0]),
            Vertex::new([-size, 0.0, size], [0.0, 1.0, 0.0], [0.0, 1.0]),
        ];
        let indices = vec![0, 2, 1, 0, 3, 2];
        Self { vertices, indices }
    }

    /// Create a UV sphere.
    pub fn sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for ring in 0..=rings {
            let phi = std::f32::consts::PI * ring as f32 / rings as f32;
            let y = radius * phi.cos();
            let ring_radius = radius * phi.sin();

            for segment in 0..=segments {
                let theta = 2.0 * std::f32::consts::PI * segment as f32 / segments as f32;
                let x = ring_radius * theta.cos();
                let z = ring_radius * theta.sin();

                let normal = Vec3::new(x, y, z).normalize_or_zero();
                let uv = [
                    segment as f32 / segments as f32,
                    ring as f32 / rings as f32,
                ];
                vertices.push(Vertex::new([x, y, z], normal.into(), uv));
            }
        }

        for ring in 0..rings {
            for segment in 0..segments {
                let current = ring * (segments + 1) + segment;
                let next = current + segments + 1;

                indices.push(current);
                indices.push(next);
                indices.push(current + 1);

                indices.push(current + 1);
                indices.push(next);
                indices.push(next + 1);
            }
        }

        Self { vertices, indices }
    }

    /// Create a bullet streak mesh: an elongated octahedron along the Z
    /// axis, so scaling Z stretches the streak along its flight direction.
    pub fn bullet_streak() -> Self {
        let front = [0.0, 0.0, 0.5_f32];
        let back = [0.0, 0.0, -0.5_f32];
        let top = [0.0, 0.3, 0.0_f32];
        let bot = [0.0, -0.3, 0.0_f32];
        let right = [0.3, 0.0, 0.0_f32];
        let left = [-0.3, 0.0, 0.0_f32];

        let vertices = vec![
            // Front-top
            Vertex::new(front, [0.0, 0.5, 0.86], [0.5, 0.0]),
            Vertex::new(right, [0.5, 0.5, 0.0], [1.0, 0.5]),
            Vertex::new(top, [0.0, 1.0, 0.0], [0.5, 0.5]),
            // Front-right
            Vertex::new(front, [0.5, 0.0, 0.86], [0.5, 0.0]),
            Vertex::new(bot, [0.0, -1.0, 0.0], [1.0, 0.5]),
            Vertex::new(right, [0.5, -0.5, 0.0], [0.5, 0.5]),
            // Front-bottom
            Vertex::new(front, [0.0, -0.5, 0.86], [0.5, 0.0]),
            Vertex::new(left, [-0.5, -0.5, 0.0], [0.0, 0.5]),
            Vertex::new(bot, [0.0, -1.0, 0.0], [0.5, 0.5]),
            // Front-left
            Vertex::new(front, [-0.5, 0.0, 0.86], [0.5, 0.0]),
            Vertex::new(top, [0.0, 1.0, 0.0], [0.0, 0.5]),
            Vertex::new(left, [-0.5, 0.5, 0.0], [0.5, 0.5]),
            // Back-top
            Vertex::new(back, [0.0, 0.5, -0.86], [0.5, 1.0]),
            Vertex::new(top, [0.0, 1.0, 0.0], [0.5, 0.5]),
            Vertex::new(right, [0.5, 0.5, 0.0], [1.0, 0.5]),
            // Back-right
            Vertex::new(back, [0.5, 0.0, -0.86], [0.5, 1.0]),
            Vertex::new(right, [0.5, -0.5, 0.0], [1.0, 0.5]),
            Vertex::new(bot, [0.0, -1.0, 0.0], [0.5, 0.5]),
            // Back-bottom
            Vertex::new(back, [0.0, -0.5, -0.86], [0.5, 1.0]),
            Vertex::new(bot, [0.0, -1.0, 0.0], [0.5, 0.5]),
            Vertex::new(left, [-0.5, -0.5, 0.0], [0.0, 0.5]),
            // Back-left
            Vertex::new(back, [-0.5, 0.0, -0.86], [0.5, 1.0]),
            Vertex::new(left, [-0.5, 0.5, 0.0], [0.0, 0.5]),
            Vertex::new(top, [0.0, 1.0, 0.0], [0.5, 0.5]),
        ];

        let indices = (0..24).collect();
        Self { vertices, indices }
    }

    /// Thin vertical quad used for rain streaks, offset so the tail trails
    /// the drop against the wind.
    pub fn rain_streak(tail: Vec3) -> Self {
        let w = 0.02_f32;
        let vertices = vec![
            Vertex::new([-w, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([w, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([tail.x + w, tail.y, tail.z], [0.0, 0.0, 1.0], [1.0, 1.0]),
            Vertex::new([tail.x - w, tail.y, tail.z], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        Self { vertices, indices }
    }
}

/// Registry of mesh data keyed by [`MeshId`].
///
/// Loading is deliberately infallible: a bad path or unparsable file logs
/// a warning and yields [`MeshId::EMPTY`], and the scene simply renders
/// without that model.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    meshes: Vec<MeshData>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self {
            // Slot 0 stays empty so MeshId::EMPTY always resolves.
            meshes: vec![MeshData::new()],
        }
    }

    /// Register generated mesh data and get its handle.
    pub fn register(&mut self, data: MeshData) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(data);
        id
    }

    /// Load an OBJ model, falling back to the empty mesh on any failure.
    pub fn load_obj(&mut self, path: impl AsRef<Path>) -> MeshId {
        let path = path.as_ref();
        match load_obj_data(path) {
            Ok(data) => {
                log::info!(
                    "loaded mesh {} ({} vertices)",
                    path.display(),
                    data.vertices.len()
                );
                self.register(data)
            }
            Err(err) => {
                log::warn!("mesh load failed, using empty mesh: {err}");
                MeshId::EMPTY
            }
        }
    }

    /// Mesh data for a handle. Unknown ids resolve to the empty mesh.
    pub fn get(&self, id: MeshId) -> &MeshData {
        self.meshes.get(id.0 as usize).unwrap_or(&self.meshes[0])
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.len() <= 1
    }
}

fn load_obj_data(path: &Path) -> Result<MeshData, AssetError> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| AssetError::ObjParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = MeshData::new();
    for model in models {
        let mesh = &model.mesh;

        let base_vertex = data.vertices.len() as u32;
        for i in 0..mesh.positions.len() / 3 {
            let position = [
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            ];

            let normal = if !mesh.normals.is_empty() {
                [
                    mesh.normals[i * 3],
                    mesh.normals[i * 3 + 1],
                    mesh.normals[i * 3 + 2],
                ]
            } else {
                Vec3::Y.into()
            };

            let uv = if !mesh.texcoords.is_empty() {
                Vec2::new(mesh.texcoords[i * 2], 1.0 - mesh.texcoords[i * 2 + 1]).into()
            } else {
                [0.0, 0.0]
            };

            data.vertices.push(Vertex::new(position, normal, uv));
        }

        for &index in &mesh.indices {
            data.indices.push(base_vertex + index);
        }
    }

    Ok(data)
}
