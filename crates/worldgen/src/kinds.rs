//! Entity kinds and their fixed property tables.

use glam::Vec3;

/// Building archetypes placed by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    /// Wide hangar, spawns an escort of aliens out front.
    Hangar,
    /// Mid-rise tower.
    Tower1,
    /// High-rise tower.
    Tower2,
}

/// Fixed per-kind properties for buildings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingProfile {
    pub scale: Vec3,
    pub health: i32,
}

impl BuildingKind {
    pub fn profile(&self) -> BuildingProfile {
        match self {
            BuildingKind::Hangar => BuildingProfile {
                scale: Vec3::splat(15.0),
                health: 20,
            },
            BuildingKind::Tower1 => BuildingProfile {
                scale: Vec3::splat(20.0),
                health: 20,
            },
            BuildingKind::Tower2 => BuildingProfile {
                scale: Vec3::splat(40.0),
                health: 50,
            },
        }
    }
}

/// Alien archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienKind {
    /// Small ground alien.
    Scout,
    /// Large alien, easier to hit.
    Heavy,
}

/// Fixed per-kind properties for aliens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlienProfile {
    /// Radius a bullet counts as a hit inside.
    pub hit_radius: f32,
    pub health: i32,
    /// Uniform scale the model is drawn at.
    pub render_scale: f32,
}

impl AlienKind {
    pub fn profile(&self) -> AlienProfile {
        match self {
            AlienKind::Scout => AlienProfile {
                hit_radius: 8.0,
                health: 4,
                render_scale: 8.0,
            },
            AlienKind::Heavy => AlienProfile {
                hit_radius: 15.0,
                health: 4,
                render_scale: 12.0,
            },
        }
    }
}
