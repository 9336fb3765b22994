//! skyring - drone flight and combat over a procedural ringed city.
//!
//! This binary is a headless demo harness: it builds a simulation from
//! the config, flies a scripted sortie at a fixed 60 Hz step, and logs a
//! summary. A windowed build would swap the script for live input and
//! hand the draw lists from [`render`] to a GPU backend.

mod camera_rig;
mod config;
mod craft;
mod events;
mod props;
mod rain;
mod render;
mod simulation;
mod weapons;
mod world;

use anyhow::Result;
use config::SimConfig;
use input::FlightIntents;
use renderer::{MeshLibrary, SceneProjection};
use sim_core::FrameClock;
use simulation::Simulation;

/// Scripted sortie: phase boundaries in simulated seconds.
struct DemoSchedule {
    tour_started: bool,
}

impl DemoSchedule {
    const CLIMB_END: f32 = 3.0;
    const BOOST_RUN_END: f32 = 10.0;
    const ATTACK_RUN_END: f32 = 16.0;
    const LOW_PASS_END: f32 = 20.0;

    fn new() -> Self {
        Self {
            tour_started: false,
        }
    }

    /// Intents for simulated time `t`. The tour toggle is an edge, so it
    /// fires on exactly one frame.
    fn intents_at(&mut self, t: f32) -> FlightIntents {
        let mut intents = FlightIntents::idle();
        if t < Self::CLIMB_END {
            intents.lift_up = true;
        } else if t < Self::BOOST_RUN_END {
            intents.forward = true;
            intents.boost = true;
            intents.bank_left = t < 6.0;
        } else if t < Self::ATTACK_RUN_END {
            intents.forward = true;
            intents.fire = true;
            intents.pitch_down = t < 12.0;
        } else if t < Self::LOW_PASS_END {
            // Full-throttle run between the towers; this is where the
            // sortie usually ends in a fireball.
            intents.forward = true;
            intents.boost = true;
        } else if !self.tour_started {
            self.tour_started = true;
            intents.tour_toggle = true;
        }
        intents
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::load("skyring.ron");
    log::info!(
        "skyring demo: seed {}, {}s at 60 Hz",
        config.seed,
        config.demo_duration_secs
    );

    let mut sim = Simulation::new(&config);
    log::info!(
        "world ready: {} buildings, {} aliens, {} spires, {} hazards",
        sim.world.buildings.len(),
        sim.world.aliens.len(),
        sim.world.spires.len(),
        sim.world.hazards.len()
    );

    // The render contract is exercised every frame even headless, so a
    // GPU backend can be dropped in without touching the loop.
    let mut library = MeshLibrary::new();
    let meshes = render::SceneMeshes::load(&mut library, "assets");
    let projection = SceneProjection::default();

    let mut clock = FrameClock::fixed(60.0);
    let mut schedule = DemoSchedule::new();
    let mut draw_calls: usize = 0;

    while clock.sim_elapsed_seconds() < config.demo_duration_secs {
        let dt = clock.tick();
        let intents = schedule.intents_at(clock.sim_elapsed_seconds());
        sim.advance(dt, &intents);

        let [full, _depth] = render::emit_frame(&sim, &meshes);
        let _uniform = render::camera_uniform(&sim, &projection);
        draw_calls += full.len();
    }

    log::info!(
        "run complete: {} frames in {:.2}s wall time",
        clock.frame_count(),
        clock.wall_elapsed_seconds()
    );
    log::info!(
        "craft at ({:.1}, {:.1}, {:.1}), kills: {}, avg draw calls/frame: {}",
        sim.craft.position.x,
        sim.craft.position.y,
        sim.craft.position.z,
        sim.kills,
        draw_calls / clock.frame_count().max(1) as usize
    );
    for event in sim.events.iter() {
        log::info!("  {event}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_toggles_the_tour_exactly_once() {
        let mut schedule = DemoSchedule::new();
        let mut toggles = 0;
        let mut t = 0.0;
        while t < 30.0 {
            if schedule.intents_at(t).tour_toggle {
                toggles += 1;
            }
            t += 1.0 / 60.0;
        }
        assert_eq!(toggles, 1);
    }

    #[test]
    fn scripted_sortie_runs_without_panics() {
        let config = SimConfig {
            demo_duration_secs: 25.0,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&config);
        let mut schedule = DemoSchedule::new();
        let mut clock = FrameClock::fixed(60.0);
        while clock.sim_elapsed_seconds() < config.demo_duration_secs {
            let dt = clock.tick();
            let intents = schedule.intents_at(clock.sim_elapsed_seconds());
            sim.advance(dt, &intents);
        }
        assert!(sim.elapsed >= 25.0);
        // The tour phase started, whatever happened on the way there.
        assert!(sim.camera.is_touring());
    }
}
