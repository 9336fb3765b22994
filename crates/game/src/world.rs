//! World state: every environment entity, the collision query, and
//! projectile combat.
//!
//! The world never reads a clock. `update` takes both the frame delta and
//! the total elapsed simulation time, so hazard positions are a pure
//! function of their index and `elapsed` and any tick is reproducible.

use glam::Vec3;
use sim_core::{dist_xz, spheres_overlap};
use worldgen::{Alien, Building, CityLayout, CityParams, Obstacle, Spire};

/// Orbiting spherical obstacle above the city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub position: Vec3,
    pub radius: f32,
}

/// One bullet in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Seconds of flight left.
    pub life: f32,
}

/// Named tunables for collision and combat.
///
/// Everything gameplay-feel lives here rather than inline, so tests and
/// the harness can retune without touching the update code.
#[derive(Debug, Clone)]
pub struct WorldTuning {
    pub hazard_count: usize,
    pub hazard_radius: f32,
    pub hazard_orbit_radius: f32,
    /// rad/s for hazard 0; each later hazard orbits a step faster.
    pub hazard_base_speed: f32,
    pub hazard_speed_step: f32,
    /// Even-indexed hazards fly the high band, odd the low band.
    pub hazard_high_altitude: f32,
    pub hazard_low_altitude: f32,
    /// Collision uses a foreshortened hazard radius so hit-boxes stay
    /// forgiving against the large rendered spheres.
    pub hazard_collision_scale: f32,
    /// Spires are solid below this height only.
    pub spire_ceiling: f32,
    pub spire_radius: f32,
    /// Bullet hit cylinder: radius as a multiple of building scale.x.
    pub building_hit_radius_scale: f32,
    /// Bullet hit ceiling: building.y + scale.y times this.
    pub building_hit_height_scale: f32,
    /// Craft collision cylinder, tighter than the hit cylinder.
    pub building_collision_radius_scale: f32,
    pub building_collision_height_scale: f32,
    /// Margin above the collision cylinder's top.
    pub building_clearance: f32,
    pub bullet_speed: f32,
    pub bullet_life: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            hazard_count: 15,
            hazard_radius: 25.0,
            hazard_orbit_radius: 250.0,
            hazard_base_speed: 0.1,
            hazard_speed_step: 0.01,
            hazard_high_altitude: 350.0,
            hazard_low_altitude: 250.0,
            hazard_collision_scale: 0.8,
            spire_ceiling: 160.0,
            spire_radius: 6.0,
            building_hit_radius_scale: 2.5,
            building_hit_height_scale: 2.0,
            building_collision_radius_scale: 0.8,
            building_collision_height_scale: 1.5,
            building_clearance: 1.0,
            bullet_speed: 400.0,
            bullet_life: 3.0,
        }
    }
}

/// What combat resolution destroyed during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatReport {
    pub buildings_destroyed: u32,
    pub aliens_destroyed: u32,
}

impl CombatReport {
    pub fn total(&self) -> u32 {
        self.buildings_destroyed + self.aliens_destroyed
    }
}

enum HitTarget {
    Building(usize),
    Alien(usize),
}

/// All environment entities and the queries against them.
#[derive(Debug)]
pub struct World {
    pub obstacles: Vec<Obstacle>,
    pub spires: Vec<Spire>,
    pub buildings: Vec<Building>,
    pub aliens: Vec<Alien>,
    pub hazards: Vec<Hazard>,
    pub bullets: Vec<Bullet>,
    pub tuning: WorldTuning,
}

impl World {
    /// Generate a world from a seed with default parameters.
    pub fn new(seed: u64) -> Self {
        Self::from_layout(
            CityLayout::generate(seed, &CityParams::default()),
            WorldTuning::default(),
        )
    }

    /// Build a world from an explicit layout. Tests use this to set up
    /// exact entity fixtures.
    pub fn from_layout(layout: CityLayout, tuning: WorldTuning) -> Self {
        let mut world = Self {
            obstacles: layout.obstacles,
            spires: layout.spires,
            buildings: layout.buildings,
            aliens: layout.aliens,
            hazards: Vec::new(),
            bullets: Vec::new(),
            tuning,
        };
        // Evaluate orbits at time zero so the hazard Vec is never empty
        // between construction and the first update.
        world.hazards = (0..world.tuning.hazard_count)
            .map(|i| Hazard {
                position: world.hazard_position(i, 0.0),
                radius: world.tuning.hazard_radius,
            })
            .collect();
        world
    }

    /// Advance hazards and bullets by one tick.
    ///
    /// `elapsed` is total simulation time; hazard positions depend on it
    /// alone, so calling this twice with the same value repositions them
    /// identically.
    pub fn update(&mut self, dt: f32, elapsed: f32) -> CombatReport {
        for i in 0..self.hazards.len() {
            let position = self.hazard_position(i, elapsed);
            self.hazards[i].position = position;
        }
        self.update_bullets(dt)
    }

    /// Closed orbit for hazard `index` at time `elapsed`.
    pub fn hazard_position(&self, index: usize, elapsed: f32) -> Vec3 {
        let t = &self.tuning;
        // Base angles split the circle evenly across the hazard count.
        let spacing = 360.0 / t.hazard_count.max(1) as f32;
        let base = (index as f32 * spacing).to_radians();
        let speed = t.hazard_base_speed + t.hazard_speed_step * index as f32;
        let angle = base + elapsed * speed;
        let altitude = if index % 2 == 0 {
            t.hazard_high_altitude
        } else {
            t.hazard_low_altitude
        };
        Vec3::new(
            angle.cos() * t.hazard_orbit_radius,
            altitude,
            angle.sin() * t.hazard_orbit_radius,
        )
    }

    fn update_bullets(&mut self, dt: f32) -> CombatReport {
        for bullet in &mut self.bullets {
            bullet.position += bullet.velocity * dt;
            bullet.life -= dt;
        }
        self.bullets.retain(|b| b.life >= 0.0);

        let mut report = CombatReport::default();
        let mut i = 0;
        while i < self.bullets.len() {
            match self.find_hit(self.bullets[i].position) {
                Some(target) => {
                    self.apply_damage(target, &mut report);
                    // Bullet order does not matter; swap_remove keeps the
                    // walk valid without advancing past the swapped-in
                    // element.
                    self.bullets.swap_remove(i);
                }
                None => i += 1,
            }
        }
        report
    }

    /// First target the bullet is inside, buildings before aliens.
    fn find_hit(&self, pos: Vec3) -> Option<HitTarget> {
        let t = &self.tuning;
        if pos.y >= 0.0 {
            for (idx, b) in self.buildings.iter().enumerate() {
                if pos.y > b.position.y + b.scale.y * t.building_hit_height_scale {
                    continue;
                }
                if dist_xz(pos, b.position) < b.scale.x * t.building_hit_radius_scale {
                    return Some(HitTarget::Building(idx));
                }
            }
        }
        for (idx, a) in self.aliens.iter().enumerate() {
            if pos.distance(a.position) < a.kind.profile().hit_radius {
                return Some(HitTarget::Alien(idx));
            }
        }
        None
    }

    fn apply_damage(&mut self, target: HitTarget, report: &mut CombatReport) {
        match target {
            HitTarget::Building(idx) => {
                self.buildings[idx].health -= 1;
                if self.buildings[idx].health <= 0 {
                    let gone = self.buildings.remove(idx);
                    report.buildings_destroyed += 1;
                    log::debug!("building destroyed at {:?}", gone.position);
                }
            }
            HitTarget::Alien(idx) => {
                self.aliens[idx].health -= 1;
                if self.aliens[idx].health <= 0 {
                    let gone = self.aliens.remove(idx);
                    report.aliens_destroyed += 1;
                    log::debug!("alien destroyed at {:?}", gone.position);
                }
            }
        }
    }

    /// Does a sphere at `position` with `radius` touch anything solid?
    ///
    /// Tests run cheapest first and short-circuit: obstacles, hazards,
    /// spires, then the per-building cylinders.
    pub fn check_collision(&self, position: Vec3, radius: f32) -> bool {
        debug_assert!(radius >= 0.0, "collision radius must be non-negative");
        let radius = radius.max(0.0);
        let t = &self.tuning;

        for o in &self.obstacles {
            if spheres_overlap(position, radius, o.position, o.radius) {
                return true;
            }
        }
        for h in &self.hazards {
            if spheres_overlap(position, radius, h.position, h.radius * t.hazard_collision_scale) {
                return true;
            }
        }
        if position.y < t.spire_ceiling {
            for s in &self.spires {
                if dist_xz(position, s.position) < t.spire_radius + radius {
                    return true;
                }
            }
        }
        for b in &self.buildings {
            let top = b.position.y
                + b.scale.y * t.building_collision_height_scale
                + t.building_clearance;
            if position.y > top {
                continue;
            }
            if dist_xz(position, b.position)
                < b.scale.x * t.building_collision_radius_scale + radius
            {
                return true;
            }
        }
        false
    }

    /// Spawn a bullet flying along `dir`. A zero direction is a no-op.
    pub fn fire_bullet(&mut self, origin: Vec3, dir: Vec3) {
        let dir = dir.normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.bullets.push(Bullet {
            position: origin,
            velocity: dir * self.tuning.bullet_speed,
            life: self.tuning.bullet_life,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldgen::{AlienKind, BuildingKind};

    fn empty_layout() -> CityLayout {
        CityLayout {
            obstacles: Vec::new(),
            spires: Vec::new(),
            buildings: Vec::new(),
            aliens: Vec::new(),
        }
    }

    fn bare_world() -> World {
        let mut tuning = WorldTuning::default();
        tuning.hazard_count = 0;
        World::from_layout(empty_layout(), tuning)
    }

    fn test_building(position: Vec3) -> Building {
        Building {
            position,
            rotation_deg: 0.0,
            scale: Vec3::splat(15.0),
            kind: BuildingKind::Hangar,
            health: 20,
            tint: None,
        }
    }

    #[test]
    fn hazard_positions_depend_only_on_elapsed() {
        let mut a = World::from_layout(empty_layout(), WorldTuning::default());
        let mut b = World::from_layout(empty_layout(), WorldTuning::default());

        // Different dt histories, same final elapsed.
        a.update(0.016, 3.0);
        a.update(0.016, 7.5);
        b.update(1.0, 7.5);

        assert_eq!(a.hazards, b.hazards);

        // Re-running the same elapsed moves nothing.
        let before = a.hazards.clone();
        a.update(0.016, 7.5);
        assert_eq!(before, a.hazards);
    }

    #[test]
    fn hazards_alternate_altitude_bands() {
        let world = World::from_layout(empty_layout(), WorldTuning::default());
        assert_eq!(world.hazards.len(), 15);
        for (i, h) in world.hazards.iter().enumerate() {
            let expected = if i % 2 == 0 { 350.0 } else { 250.0 };
            assert_eq!(h.position.y, expected);
            let r = (h.position.x * h.position.x + h.position.z * h.position.z).sqrt();
            assert!((r - 250.0).abs() < 1e-3);
        }
    }

    #[test]
    fn hazard_base_angles_follow_the_count() {
        let mut tuning = WorldTuning::default();
        tuning.hazard_count = 10;
        let world = World::from_layout(empty_layout(), tuning);
        assert_eq!(world.hazards.len(), 10);

        let angle_deg = |p: Vec3| {
            let a = p.z.atan2(p.x).to_degrees();
            (a + 360.0) % 360.0
        };
        for (i, h) in world.hazards.iter().enumerate() {
            let expected = (i as f32 * 36.0) % 360.0;
            let got = angle_deg(h.position);
            assert!(
                (got - expected).abs() < 1e-2,
                "hazard {i}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn bullet_expires_after_its_lifetime() {
        let mut world = bare_world();
        world.fire_bullet(Vec3::new(0.0, 100.0, 0.0), Vec3::X);
        assert_eq!(world.bullets.len(), 1);

        let dt = 0.1;
        let steps = (world.tuning.bullet_life / dt).ceil() as usize + 1;
        for step in 0..steps {
            world.update(dt, step as f32 * dt);
        }
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn zero_direction_fire_is_a_noop() {
        let mut world = bare_world();
        world.fire_bullet(Vec3::ZERO, Vec3::ZERO);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn bullet_hit_decrements_health_and_consumes_bullet() {
        let mut world = bare_world();
        world.buildings.push(test_building(Vec3::new(0.0, 0.1, 0.0)));
        world.bullets.push(Bullet {
            position: Vec3::new(0.0, 10.0, -30.0),
            velocity: Vec3::new(0.0, 0.0, 300.0),
            life: 3.0,
        });

        let report = world.update(0.1, 0.1);
        assert_eq!(report, CombatReport::default());
        assert!(world.bullets.is_empty(), "bullet consumed on hit");
        assert_eq!(world.buildings[0].health, 19);
    }

    #[test]
    fn entity_at_one_health_is_removed_same_tick() {
        let mut world = bare_world();
        let mut building = test_building(Vec3::new(0.0, 0.1, 0.0));
        building.health = 1;
        world.buildings.push(building);
        world.aliens.push(Alien {
            position: Vec3::new(500.0, 10.0, 0.0),
            kind: AlienKind::Heavy,
            health: 1,
        });

        world.bullets.push(Bullet {
            position: Vec3::new(0.0, 5.0, 0.0),
            velocity: Vec3::ZERO,
            life: 1.0,
        });
        world.bullets.push(Bullet {
            position: Vec3::new(500.0, 10.0, 0.0),
            velocity: Vec3::ZERO,
            life: 1.0,
        });

        let report = world.update(0.01, 0.01);
        assert_eq!(report.buildings_destroyed, 1);
        assert_eq!(report.aliens_destroyed, 1);
        assert!(world.buildings.is_empty());
        assert!(world.aliens.is_empty());
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn buildings_shadow_aliens_in_hit_order() {
        let mut world = bare_world();
        world.buildings.push(test_building(Vec3::new(0.0, 0.1, 0.0)));
        // Alien inside the same hit cylinder.
        world.aliens.push(Alien {
            position: Vec3::new(0.0, 5.0, 0.0),
            kind: AlienKind::Heavy,
            health: 4,
        });
        world.bullets.push(Bullet {
            position: Vec3::new(0.0, 5.0, 0.0),
            velocity: Vec3::ZERO,
            life: 1.0,
        });

        world.update(0.01, 0.01);
        assert_eq!(world.buildings[0].health, 19, "building absorbs the hit");
        assert_eq!(world.aliens[0].health, 4, "alien untouched");
    }

    #[test]
    fn bullets_below_ground_skip_building_tests() {
        let mut world = bare_world();
        world.buildings.push(test_building(Vec3::new(0.0, 0.1, 0.0)));
        world.bullets.push(Bullet {
            position: Vec3::new(0.0, -1.0, 0.0),
            velocity: Vec3::ZERO,
            life: 1.0,
        });
        world.update(0.01, 0.01);
        assert_eq!(world.buildings[0].health, 20);
        assert_eq!(world.bullets.len(), 1);
    }

    #[test]
    fn collision_order_short_circuits_on_obstacle() {
        let mut world = bare_world();
        // Obstacle and building overlap the same probe point.
        world.obstacles.push(Obstacle {
            position: Vec3::new(0.0, 10.0, 0.0),
            radius: 30.0,
        });
        world.buildings.push(test_building(Vec3::new(0.0, 0.1, 0.0)));
        assert!(world.check_collision(Vec3::new(0.0, 10.0, 0.0), 0.5));

        // Building alone still collides, so both layers are live.
        world.obstacles.clear();
        assert!(world.check_collision(Vec3::new(0.0, 10.0, 0.0), 0.5));
    }

    #[test]
    fn hazard_collision_radius_is_foreshortened() {
        let mut world = World::from_layout(empty_layout(), WorldTuning::default());
        world.update(0.0, 0.0);
        let h = world.hazards[0];
        // Inside the visual radius but outside 0.8x of it: no hit.
        let probe = h.position + Vec3::X * (h.radius * 0.9);
        assert!(!world.check_collision(probe, 0.0));
        let probe = h.position + Vec3::X * (h.radius * 0.7);
        assert!(world.check_collision(probe, 0.0));
    }

    #[test]
    fn spires_end_at_the_ceiling() {
        let mut world = bare_world();
        world.spires.push(Spire {
            position: Vec3::new(300.0, 0.0, 0.0),
        });
        assert!(world.check_collision(Vec3::new(300.0, 100.0, 0.0), 0.5));
        assert!(!world.check_collision(Vec3::new(300.0, 200.0, 0.0), 0.5));
    }

    #[test]
    fn building_collision_clears_above_the_roof() {
        let mut world = bare_world();
        world.buildings.push(test_building(Vec3::new(0.0, 0.1, 0.0)));
        // Roof = 0.1 + 15 * 1.5 + 1.0 clearance.
        assert!(world.check_collision(Vec3::new(0.0, 20.0, 0.0), 0.5));
        assert!(!world.check_collision(Vec3::new(0.0, 25.0, 0.0), 0.5));
    }

    #[test]
    fn same_seed_builds_identical_worlds() {
        let a = World::new(42);
        let b = World::new(42);
        assert_eq!(a.buildings, b.buildings);
        assert_eq!(a.aliens, b.aliens);
        assert_eq!(a.spires, b.spires);
        assert_eq!(a.hazards, b.hazards);
    }
}
