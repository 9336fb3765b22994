//! Scene walk: turns simulation state into draw lists for the backend.
//!
//! Nothing here touches a GPU. The walk reads poses out of the
//! simulation, assembles model matrices through [`TransformSpec`], and
//! fills one [`DrawList`] per pass. The depth-only pass feeds the shadow
//! map and skips the emissive bits (sun, bullets, rain).

use crate::simulation::Simulation;
use glam::{Mat4, Vec3};
use renderer::{CameraUniform, DrawList, MeshData, MeshId, MeshLibrary, RenderPass, SceneProjection};
use sim_core::TransformSpec;
use worldgen::AlienKind;

/// Rendered size and tint of the three obstacle rocks. Collision radii
/// stay at their own values; these are the dressed-up visuals.
const ROCK_SCALES: [f32; 3] = [50.0, 80.0, 60.0];
const ROCK_YAWS: [f32; 3] = [0.0, 90.0, 180.0];
const ROCK_GREYS: [f32; 3] = [0.6, 0.5, 0.7];

const SPIRE_SCALE: Vec3 = Vec3::new(15.0, 80.0, 15.0);
const SPIRE_TINT: Vec3 = Vec3::new(0.4, 0.4, 0.5);
const SCOUT_TINT: Vec3 = Vec3::new(0.2, 0.8, 0.2);
const BULLET_SCALE: Vec3 = Vec3::new(0.5, 0.5, 6.0);
const BULLET_TINT: Vec3 = Vec3::new(0.0, 1.0, 1.0);
const HAZARD_TINT: Vec3 = Vec3::new(0.6, 0.5, 0.4);
const SUN_POSITION: Vec3 = Vec3::new(0.0, 500.0, 500.0);
const SUN_TINT: Vec3 = Vec3::new(1.0, 1.0, 0.5);

/// Craters are flattened dishes sunk into the ground.
const CRATERS: [(Vec3, f32, f32); 2] = [
    (Vec3::new(-100.0, -5.0, -100.0), 30.0, 0.0),
    (Vec3::new(250.0, -5.0, 250.0), 45.0, 45.0),
];

/// Every mesh handle the scene walk draws with.
#[derive(Debug)]
pub struct SceneMeshes {
    pub ground: MeshId,
    pub rock: MeshId,
    pub crater: MeshId,
    pub spire: MeshId,
    pub hazard: MeshId,
    pub sun: MeshId,
    pub bullet: MeshId,
    pub rain: MeshId,
    pub drone: MeshId,
    pub hangar: MeshId,
    pub tower1: MeshId,
    pub tower2: MeshId,
    pub alien_scout: MeshId,
    pub alien_heavy: MeshId,
}

impl SceneMeshes {
    /// Load model files and register the procedural primitives. Missing
    /// model files degrade to empty handles and the scene draws without
    /// them.
    pub fn load(library: &mut MeshLibrary, asset_root: &str) -> Self {
        let wind = crate::rain::RainLayer::WIND;
        let ground = library.register(MeshData::plane(4000.0));
        let rock = library.register(MeshData::sphere(1.0, 16, 12));
        let crater = library.register(MeshData::sphere(1.0, 16, 8));
        let spire = library.register(MeshData::cube());
        let hazard = library.register(MeshData::sphere(1.0, 16, 12));
        let sun = library.register(MeshData::sphere(1.0, 24, 16));
        let bullet = library.register(MeshData::bullet_streak());
        let rain = library.register(MeshData::rain_streak(Vec3::new(
            -wind.x * 0.1,
            0.5,
            -wind.z * 0.1,
        )));
        let mut obj =
            |name: &str| library.load_obj(format!("{asset_root}/models/{name}.obj"));
        Self {
            ground,
            rock,
            crater,
            spire,
            hazard,
            sun,
            bullet,
            rain,
            drone: obj("drone"),
            hangar: obj("hangar"),
            tower1: obj("tower1"),
            tower2: obj("tower2"),
            alien_scout: obj("alien_scout"),
            alien_heavy: obj("alien_heavy"),
        }
    }

    fn for_building(&self, kind: worldgen::BuildingKind) -> MeshId {
        match kind {
            worldgen::BuildingKind::Hangar => self.hangar,
            worldgen::BuildingKind::Tower1 => self.tower1,
            worldgen::BuildingKind::Tower2 => self.tower2,
        }
    }
}

/// Build the draw list for one pass.
pub fn emit_pass(sim: &Simulation, meshes: &SceneMeshes, pass: RenderPass) -> DrawList {
    let mut list = DrawList::new(pass);
    let full = pass == RenderPass::Full;

    list.push(
        meshes.ground,
        TransformSpec::UniformScale {
            scale: 1.0,
            yaw_deg: 0.0,
        }
        .matrix(Vec3::ZERO),
        None,
    );

    for (i, rock) in sim.world.obstacles.iter().enumerate().take(3) {
        list.push(
            meshes.rock,
            TransformSpec::UniformScale {
                scale: ROCK_SCALES[i],
                yaw_deg: ROCK_YAWS[i],
            }
            .matrix(rock.position),
            Some(Vec3::splat(ROCK_GREYS[i])),
        );
    }

    for (position, scale, yaw_deg) in CRATERS {
        list.push(
            meshes.crater,
            TransformSpec::PerAxisScale {
                scale: Vec3::new(scale, scale * 0.2, scale),
                yaw_deg,
            }
            .matrix(position),
            None,
        );
    }

    for spire in &sim.world.spires {
        list.push(
            meshes.spire,
            TransformSpec::PerAxisScale {
                scale: SPIRE_SCALE,
                yaw_deg: 0.0,
            }
            .matrix(spire.position + Vec3::Y * SPIRE_SCALE.y * 0.5),
            Some(SPIRE_TINT),
        );
    }

    for building in &sim.world.buildings {
        list.push(
            meshes.for_building(building.kind),
            TransformSpec::PerAxisScale {
                scale: building.scale,
                yaw_deg: building.rotation_deg,
            }
            .matrix(building.position),
            building.tint,
        );
    }

    for alien in &sim.world.aliens {
        let profile = alien.kind.profile();
        let (mesh, tint) = match alien.kind {
            AlienKind::Scout => (meshes.alien_scout, Some(SCOUT_TINT)),
            AlienKind::Heavy => (meshes.alien_heavy, None),
        };
        list.push(
            mesh,
            TransformSpec::UniformScale {
                scale: profile.render_scale,
                yaw_deg: 0.0,
            }
            .matrix(alien.position),
            tint,
        );
    }

    for (i, hazard) in sim.world.hazards.iter().enumerate() {
        list.push(
            meshes.hazard,
            TransformSpec::UniformScale {
                scale: 20.0 + (i % 10) as f32,
                yaw_deg: sim.elapsed * 20.0,
            }
            .matrix(hazard.position),
            Some(HAZARD_TINT),
        );
    }

    // Player craft plus the parked wingmen.
    list.push(
        meshes.drone,
        Mat4::from_rotation_translation(sim.craft.render_rotation(), sim.craft.position),
        None,
    );
    for prop in &sim.props {
        list.push(
            meshes.drone,
            TransformSpec::UniformScale {
                scale: 1.0,
                yaw_deg: prop.yaw_deg,
            }
            .matrix(prop.position),
            None,
        );
    }

    if full {
        for bullet in &sim.world.bullets {
            list.push(
                meshes.bullet,
                TransformSpec::DirectionAligned {
                    dir: bullet.velocity,
                    scale: BULLET_SCALE,
                }
                .matrix(bullet.position),
                Some(BULLET_TINT),
            );
        }

        list.push(
            meshes.sun,
            TransformSpec::UniformScale {
                scale: 30.0,
                yaw_deg: 0.0,
            }
            .matrix(SUN_POSITION),
            Some(SUN_TINT),
        );

        if let Some(rain) = &sim.rain {
            for drop in &rain.drops {
                list.push(
                    meshes.rain,
                    TransformSpec::UniformScale {
                        scale: 1.0,
                        yaw_deg: 0.0,
                    }
                    .matrix(drop.position),
                    None,
                );
            }
        }
    }

    list
}

/// Both passes for one frame: full first, then the shadow feed.
pub fn emit_frame(sim: &Simulation, meshes: &SceneMeshes) -> [DrawList; 2] {
    [
        emit_pass(sim, meshes, RenderPass::Full),
        emit_pass(sim, meshes, RenderPass::DepthOnly),
    ]
}

/// Camera uniform for the frame from the rig's view and the lens.
pub fn camera_uniform(sim: &Simulation, projection: &SceneProjection) -> CameraUniform {
    let mut uniform = CameraUniform::new();
    uniform.update(sim.camera.view(), projection, sim.camera.position);
    uniform
}
