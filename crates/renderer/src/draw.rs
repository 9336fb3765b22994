//! Per-frame draw lists emitted by the simulation.

use crate::mesh::MeshId;
use crate::vertex::InstanceData;
use glam::{Mat4, Vec3};
use std::collections::BTreeMap;

/// Which pass a draw list belongs to.
///
/// The depth-only pass feeds shadow mapping and skips emissive geometry,
/// so bullets and the sun marker never cast shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    Full,
    DepthOnly,
}

/// One mesh drawn with one model matrix and optional tint.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub mesh: MeshId,
    pub model: Mat4,
    pub tint: Option<Vec3>,
}

/// Everything the backend needs to draw one pass of one frame.
#[derive(Debug)]
pub struct DrawList {
    pub pass: RenderPass,
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new(pass: RenderPass) -> Self {
        Self {
            pass,
            calls: Vec::new(),
        }
    }

    pub fn push(&mut self, mesh: MeshId, model: Mat4, tint: Option<Vec3>) {
        self.calls.push(DrawCall { mesh, model, tint });
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Group calls into per-mesh instance buffers for instanced drawing.
    /// Calls against [`MeshId::EMPTY`] are dropped here.
    pub fn batches(&self) -> BTreeMap<MeshId, Vec<InstanceData>> {
        let mut batches: BTreeMap<MeshId, Vec<InstanceData>> = BTreeMap::new();
        for call in &self.calls {
            if call.mesh == MeshId::EMPTY {
                continue;
            }
            batches
                .entry(call.mesh)
                .or_default()
                .push(InstanceData::new(call.model, call.tint));
        }
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_group_by_mesh_and_skip_empty() {
        let mut list = DrawList::new(RenderPass::Full);
        let a = MeshId(1);
        let b = MeshId(2);
        list.push(a, Mat4::IDENTITY, None);
        list.push(b, Mat4::IDENTITY, Some(Vec3::new(0.5, 0.6, 0.8)));
        list.push(a, Mat4::from_translation(Vec3::X), None);
        list.push(MeshId::EMPTY, Mat4::IDENTITY, None);

        let batches = list.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[&a].len(), 2);
        assert_eq!(batches[&b].len(), 1);
        assert_eq!(batches[&b][0].color, [0.5, 0.6, 0.8, 1.0]);
    }
}
