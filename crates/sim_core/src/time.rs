//! Frame timing for the demo loop.

use std::time::Instant;

/// Fixed-step clock driving the simulation.
///
/// The simulation itself consumes simulated seconds only; wall time is
/// tracked for the end-of-run report.
#[derive(Debug)]
pub struct FrameClock {
    /// Simulated seconds per frame.
    step: f32,
    /// Total simulated time.
    sim_elapsed: f32,
    /// Frames ticked so far.
    frame_count: u64,
    /// Wall-clock start.
    started: Instant,
}

impl FrameClock {
    /// Create a clock stepping at `hz` frames per simulated second.
    pub fn fixed(hz: f32) -> Self {
        debug_assert!(hz > 0.0, "frame rate must be positive");
        Self {
            step: 1.0 / hz.max(1.0),
            sim_elapsed: 0.0,
            frame_count: 0,
            started: Instant::now(),
        }
    }

    /// Advance one frame and return the timestep in seconds.
    pub fn tick(&mut self) -> f32 {
        self.sim_elapsed += self.step;
        self.frame_count += 1;
        self.step
    }

    pub fn step_seconds(&self) -> f32 {
        self.step
    }

    pub fn sim_elapsed_seconds(&self) -> f32 {
        self.sim_elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn wall_elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_accumulates_sim_time() {
        let mut clock = FrameClock::fixed(60.0);
        for _ in 0..120 {
            let dt = clock.tick();
            assert!((dt - 1.0 / 60.0).abs() < 1e-7);
        }
        assert_eq!(clock.frame_count(), 120);
        assert!((clock.sim_elapsed_seconds() - 2.0).abs() < 1e-4);
    }
}
