//! The simulation aggregate: one struct that owns the whole game state
//! and advances it one tick at a time.
//!
//! Everything is explicit: the orchestrator owns a `Simulation`, calls
//! `advance` with the frame delta and that frame's intents, and reads
//! poses back out for drawing. Multiple independent simulations can
//! coexist, which the tests rely on.

use crate::camera_rig::CameraRig;
use crate::config::SimConfig;
use crate::craft::Craft;
use crate::events::SimEvents;
use crate::props::{parked_drones, Prop};
use crate::rain::RainLayer;
use crate::weapons::Weapon;
use crate::world::World;
use glam::Vec3;
use input::FlightIntents;

/// Where the craft starts.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Muzzle offset ahead of the craft, along its forward vector.
const MUZZLE_OFFSET: f32 = 2.0;

/// One complete, self-contained simulation instance.
#[derive(Debug)]
pub struct Simulation {
    pub world: World,
    pub craft: Craft,
    pub camera: CameraRig,
    pub weapon: Weapon,
    pub rain: Option<RainLayer>,
    pub props: Vec<Prop>,
    pub events: SimEvents,
    /// Total simulated seconds; drives the hazard orbits.
    pub elapsed: f32,
    pub kills: u32,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let craft = Craft::new(SPAWN_POSITION);
        let camera = CameraRig::new(
            SPAWN_POSITION + Vec3::new(0.0, 6.0, 20.0),
            SPAWN_POSITION,
        );
        Self {
            world: World::new(config.seed),
            craft,
            camera,
            weapon: Weapon::new(config.fire_cooldown),
            rain: config
                .rain_enabled
                .then(|| RainLayer::new(config.seed, SPAWN_POSITION)),
            props: parked_drones(),
            events: SimEvents::new(),
            elapsed: 0.0,
            kills: 0,
        }
    }

    /// Advance the whole simulation by one tick.
    pub fn advance(&mut self, dt: f32, intents: &FlightIntents) {
        self.elapsed += dt;

        let report = self.world.update(dt, self.elapsed);
        if report.total() > 0 {
            self.kills += report.total();
            if report.buildings_destroyed > 0 {
                self.events
                    .push(format!("{} building(s) leveled", report.buildings_destroyed));
            }
            if report.aliens_destroyed > 0 {
                self.events
                    .push(format!("{} alien(s) down", report.aliens_destroyed));
            }
        }

        let was_crashed = self.craft.crashed;
        self.craft.update(dt, intents, &self.world);
        if !was_crashed && self.craft.crashed {
            self.events.push(format!(
                "crashed at ({:.0}, {:.0}, {:.0})",
                self.craft.position.x, self.craft.position.y, self.craft.position.z
            ));
        } else if was_crashed && !self.craft.crashed {
            self.events.push("back on the pad, systems reset");
        }

        self.weapon.update(dt);
        if intents.fire && !self.craft.crashed && self.weapon.fire() {
            let forward = self.craft.forward();
            self.world
                .fire_bullet(self.craft.position + forward * MUZZLE_OFFSET, forward);
        }

        if intents.tour_toggle {
            self.camera.toggle_tour();
            self.events.push(if self.camera.is_touring() {
                "presentation tour started"
            } else {
                "presentation tour stopped"
            });
        }
        self.camera.update(dt, &self.craft);

        if let Some(rain) = &mut self.rain {
            rain.update(dt, self.craft.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn sim() -> Simulation {
        Simulation::new(&SimConfig::default())
    }

    #[test]
    fn spawn_area_is_flyable() {
        let mut sim = sim();
        let mut intents = FlightIntents::idle();
        intents.lift_up = true;
        for _ in 0..120 {
            sim.advance(DT, &intents);
        }
        assert!(!sim.craft.crashed, "craft crashed during takeoff");
        assert!(sim.craft.position.y > 30.0);
    }

    #[test]
    fn holding_fire_spawns_bullets_at_cadence() {
        let mut sim = sim();
        let mut intents = FlightIntents::idle();
        intents.fire = true;
        sim.advance(DT, &intents);
        assert_eq!(sim.world.bullets.len(), 1);
        sim.advance(DT, &intents);
        assert_eq!(sim.world.bullets.len(), 1, "cooldown holds the trigger");
        for _ in 0..10 {
            sim.advance(DT, &intents);
        }
        assert_eq!(sim.world.bullets.len(), 2);
    }

    #[test]
    fn crashed_craft_does_not_fire() {
        let mut sim = sim();
        sim.craft.crashed = true;
        let mut intents = FlightIntents::idle();
        intents.fire = true;
        sim.advance(DT, &intents);
        assert!(sim.world.bullets.is_empty());
    }

    #[test]
    fn tour_toggle_flips_camera_mode_and_logs() {
        let mut sim = sim();
        let mut intents = FlightIntents::idle();
        intents.tour_toggle = true;
        sim.advance(DT, &intents);
        assert!(sim.camera.is_touring());
        assert!(sim.events.iter().any(|e| e.contains("tour started")));

        sim.advance(DT, &intents);
        assert!(!sim.camera.is_touring());
    }

    #[test]
    fn elapsed_time_accumulates_and_moves_hazards() {
        let mut sim = sim();
        let h0 = sim.world.hazards[0].position;
        for _ in 0..600 {
            sim.advance(DT, &FlightIntents::idle());
        }
        assert!((sim.elapsed - 10.0).abs() < 1e-3);
        assert!(sim.world.hazards[0].position.distance(h0) > 1.0);
    }

    #[test]
    fn rain_can_be_disabled_by_config() {
        let config = SimConfig {
            rain_enabled: false,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&config);
        assert!(sim.rain.is_none());
        sim.advance(DT, &FlightIntents::idle());
    }

    #[test]
    fn two_simulations_stay_independent() {
        let mut a = sim();
        let b = sim();
        let mut intents = FlightIntents::idle();
        intents.forward = true;
        intents.boost = true;
        for _ in 0..60 {
            a.advance(DT, &intents);
        }
        assert_ne!(a.craft.position, b.craft.position);
        assert_eq!(b.elapsed, 0.0);
    }
}
