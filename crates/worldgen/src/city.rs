//! Seeded generation of the city the drone patrols: rock obstacles,
//! spires, the inner district, the outer ring, and the aliens that
//! populate both.

use crate::kinds::{AlienKind, BuildingKind};
use glam::{Quat, Vec3};
use rand::prelude::*;

/// Static collision sphere near spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec3,
    pub radius: f32,
}

/// Tall thin hazard, solid from the ground up to the spire ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spire {
    pub position: Vec3,
}

/// One placed building.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub position: Vec3,
    pub rotation_deg: f32,
    pub scale: Vec3,
    pub kind: BuildingKind,
    pub health: i32,
    /// `None` keeps the model's own material (the outer ring is untinted).
    pub tint: Option<Vec3>,
}

/// One placed alien.
#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    pub position: Vec3,
    pub kind: AlienKind,
    pub health: i32,
}

/// Tunables for city generation.
#[derive(Debug, Clone)]
pub struct CityParams {
    pub spire_count: usize,
    /// Spires land in x,z within +/- this extent.
    pub spire_extent: f32,
    /// Placement attempts for the inner district; rejected attempts are
    /// dropped, so the district holds at most this many buildings.
    pub district_attempts: usize,
    pub district_extent: f32,
    /// Half-width of the square kept clear around the craft spawn.
    pub spawn_exclusion: f32,
    /// Minimum spacing between district buildings.
    pub building_spacing: f32,
    pub hangar_escort_count: usize,
    /// How far in front of a hangar its escorts stand.
    pub escort_distance: f32,
    pub escort_spacing: f32,
    pub free_alien_attempts: usize,
    pub ring_count: usize,
    pub ring_radius: f32,
    pub ring_width: f32,
    /// Degrees of forward jitter applied to each ring slot.
    pub ring_angle_jitter: f32,
    /// Every n-th ring building gets a rooftop alien.
    pub ring_alien_stride: usize,
}

impl Default for CityParams {
    fn default() -> Self {
        Self {
            spire_count: 20,
            spire_extent: 400.0,
            district_attempts: 200,
            district_extent: 1200.0,
            spawn_exclusion: 200.0,
            building_spacing: 150.0,
            hangar_escort_count: 3,
            escort_distance: 80.0,
            escort_spacing: 25.0,
            free_alien_attempts: 50,
            ring_count: 800,
            ring_radius: 1800.0,
            ring_width: 500.0,
            ring_angle_jitter: 5.0,
            ring_alien_stride: 5,
        }
    }
}

/// Tint palette for the inner district.
const DISTRICT_TINTS: [Vec3; 4] = [
    Vec3::new(0.8, 0.8, 0.9),
    Vec3::new(0.5, 0.6, 0.8),
    Vec3::new(0.7, 0.7, 0.7),
    Vec3::new(0.9, 0.8, 0.7),
];

/// Buildings sit slightly proud of the ground plane.
const BUILDING_BASE_Y: f32 = 0.1;

/// Everything the generator places.
#[derive(Debug, Clone, PartialEq)]
pub struct CityLayout {
    pub obstacles: Vec<Obstacle>,
    pub spires: Vec<Spire>,
    pub buildings: Vec<Building>,
    pub aliens: Vec<Alien>,
}

impl CityLayout {
    /// Generate the full layout. The same seed always produces the same
    /// layout.
    pub fn generate(seed: u64, params: &CityParams) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut layout = Self {
            obstacles: vec![
                Obstacle {
                    position: Vec3::new(100.0, 0.0, 100.0),
                    radius: 30.0,
                },
                Obstacle {
                    position: Vec3::new(200.0, 0.0, -150.0),
                    radius: 45.0,
                },
                Obstacle {
                    position: Vec3::new(-150.0, 0.0, 120.0),
                    radius: 35.0,
                },
            ],
            spires: Vec::new(),
            buildings: Vec::new(),
            aliens: Vec::new(),
        };

        layout.place_spires(&mut rng, params);
        layout.place_district(&mut rng, params);
        layout.place_free_aliens(&mut rng, params);
        layout.place_ring(&mut rng, params);

        log::info!(
            "generated city: {} buildings, {} aliens, {} spires",
            layout.buildings.len(),
            layout.aliens.len(),
            layout.spires.len()
        );
        layout
    }

    fn in_spawn_zone(x: f32, z: f32, params: &CityParams) -> bool {
        x.abs() < params.spawn_exclusion && z.abs() < params.spawn_exclusion
    }

    fn place_spires(&mut self, rng: &mut StdRng, params: &CityParams) {
        for _ in 0..params.spire_count {
            // Redraw samples that land on the spawn point.
            let position = loop {
                let x = rng.gen_range(-params.spire_extent..params.spire_extent);
                let z = rng.gen_range(-params.spire_extent..params.spire_extent);
                if !Self::in_spawn_zone(x, z, params) {
                    break Vec3::new(x, 0.0, z);
                }
            };
            self.spires.push(Spire { position });
        }
    }

    fn place_district(&mut self, rng: &mut StdRng, params: &CityParams) {
        for _ in 0..params.district_attempts {
            let x = rng.gen_range(-params.district_extent..params.district_extent);
            let z = rng.gen_range(-params.district_extent..params.district_extent);
            if Self::in_spawn_zone(x, z, params) {
                continue;
            }
            let position = Vec3::new(x, BUILDING_BASE_Y, z);
            let crowded = self
                .buildings
                .iter()
                .any(|b| b.position.distance(position) < params.building_spacing);
            if crowded {
                continue;
            }

            let rotation_deg = rng.gen_range(0.0..360.0);
            let kind = match rng.gen_range(0..100) {
                0..=39 => BuildingKind::Hangar,
                40..=69 => BuildingKind::Tower1,
                _ => BuildingKind::Tower2,
            };
            let tint = DISTRICT_TINTS[rng.gen_range(0..DISTRICT_TINTS.len())];

            if kind == BuildingKind::Hangar {
                self.place_escorts(rng, params, position, rotation_deg);
            }

            let profile = kind.profile();
            self.buildings.push(Building {
                position,
                rotation_deg,
                scale: profile.scale,
                kind,
                health: profile.health,
                tint: Some(tint),
            });
        }
    }

    /// A row of aliens centered in front of a hangar's door.
    fn place_escorts(
        &mut self,
        rng: &mut StdRng,
        params: &CityParams,
        hangar_pos: Vec3,
        rotation_deg: f32,
    ) {
        let yaw = Quat::from_rotation_y(rotation_deg.to_radians());
        let fwd = yaw * -Vec3::Z;
        let right = yaw * Vec3::X;
        let kind = if rng.gen_range(0..2) == 0 {
            AlienKind::Scout
        } else {
            AlienKind::Heavy
        };

        let half_row = (params.hangar_escort_count as f32 - 1.0) / 2.0;
        for a in 0..params.hangar_escort_count {
            let offset = a as f32 - half_row;
            let mut position =
                hangar_pos + fwd * params.escort_distance + right * offset * params.escort_spacing;
            position.y = 0.0;
            self.aliens.push(Alien {
                position,
                kind,
                health: kind.profile().health,
            });
        }
    }

    fn place_free_aliens(&mut self, rng: &mut StdRng, params: &CityParams) {
        for _ in 0..params.free_alien_attempts {
            let x = rng.gen_range(-params.district_extent..params.district_extent);
            let z = rng.gen_range(-params.district_extent..params.district_extent);
            if Self::in_spawn_zone(x, z, params) {
                continue;
            }
            self.aliens.push(Alien {
                position: Vec3::new(x, 10.0, z),
                kind: AlienKind::Heavy,
                health: AlienKind::Heavy.profile().health,
            });
        }
    }

    fn place_ring(&mut self, rng: &mut StdRng, params: &CityParams) {
        let slice_deg = 360.0 / params.ring_count as f32;
        let half_width = params.ring_width * 0.5;

        for i in 0..params.ring_count {
            let angle_deg = i as f32 * slice_deg + rng.gen_range(0.0..params.ring_angle_jitter);
            let r = params.ring_radius + rng.gen_range(-half_width..half_width);
            let x = r * angle_deg.to_radians().cos();
            let z = r * angle_deg.to_radians().sin();
            let position = Vec3::new(x, BUILDING_BASE_Y, z);

            let rotation_deg = rng.gen_range(0.0..360.0);
            let kind = if rng.gen_range(0..10) < 3 {
                BuildingKind::Hangar
            } else if rng.gen_range(0..2) == 0 {
                BuildingKind::Tower1
            } else {
                BuildingKind::Tower2
            };

            let profile = kind.profile();
            self.buildings.push(Building {
                position,
                rotation_deg,
                scale: profile.scale,
                kind,
                health: profile.health,
                tint: None,
            });

            if i % params.ring_alien_stride == 0 {
                self.aliens.push(Alien {
                    position: Vec3::new(x, 20.0, z),
                    kind: AlienKind::Heavy,
                    health: AlienKind::Heavy.profile().health,
                });
            }
        }
    }
}
