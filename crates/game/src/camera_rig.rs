//! Follow camera and the scripted presentation tour.

use crate::craft::Craft;
use glam::{Mat4, Vec3};
use sim_core::exp_approach_vec3;

/// The five stops of the scenic tour: high orbit, hazard-belt level, a
/// low pass behind the spires, a ground skim, and the final approach.
pub const TOUR_WAYPOINTS: [Vec3; 5] = [
    Vec3::new(0.0, 400.0, 400.0),
    Vec3::new(300.0, 150.0, 0.0),
    Vec3::new(0.0, 50.0, -300.0),
    Vec3::new(-200.0, 20.0, 100.0),
    Vec3::new(0.0, 20.0, 30.0),
];

/// Which state machine owns the camera this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Follow,
    Tour,
}

/// Tour playback state. `timer` counts in segments, so its integer part
/// is the active segment and its fraction the interpolation factor.
#[derive(Debug, Clone)]
pub struct TourState {
    pub waypoints: Vec<Vec3>,
    pub timer: f32,
}

/// Camera tunables.
#[derive(Debug, Clone)]
pub struct CameraTuning {
    /// Follow offset behind the craft along its forward vector.
    pub follow_distance: f32,
    pub follow_height: f32,
    /// Look target distance ahead of the craft.
    pub look_ahead: f32,
    /// Smoothing rate for position and look target, 1/s.
    pub follow_rate: f32,
    /// Tour playback speed in segments per second.
    pub tour_speed: f32,
    /// The tour always frames the action area, not its own path.
    pub tour_look_target: Vec3,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_distance: 20.0,
            follow_height: 6.0,
            look_ahead: 10.0,
            follow_rate: 5.0,
            tour_speed: 0.2,
            tour_look_target: Vec3::new(0.0, 20.0, 0.0),
        }
    }
}

/// The camera: either chasing the craft or flying the tour.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_target: Vec3,
    pub mode: CameraMode,
    pub tour: TourState,
    pub tuning: CameraTuning,
}

impl CameraRig {
    pub fn new(position: Vec3, look_target: Vec3) -> Self {
        Self {
            position,
            look_target,
            mode: CameraMode::Follow,
            tour: TourState {
                waypoints: TOUR_WAYPOINTS.to_vec(),
                timer: 0.0,
            },
            tuning: CameraTuning::default(),
        }
    }

    /// Switch to the tour from its first waypoint.
    pub fn start_tour(&mut self) {
        self.mode = CameraMode::Tour;
        self.tour.timer = 0.0;
    }

    /// Back to the follow camera. Tour progress is abandoned.
    pub fn stop_tour(&mut self) {
        self.mode = CameraMode::Follow;
    }

    pub fn is_touring(&self) -> bool {
        self.mode == CameraMode::Tour
    }

    /// Flip between modes. The caller supplies the edge detection.
    pub fn toggle_tour(&mut self) {
        if self.is_touring() {
            self.stop_tour();
        } else {
            self.start_tour();
        }
    }

    pub fn update(&mut self, dt: f32, craft: &Craft) {
        match self.mode {
            CameraMode::Follow => self.update_follow(dt, craft),
            CameraMode::Tour => self.update_tour(dt),
        }
    }

    fn update_follow(&mut self, dt: f32, craft: &Craft) {
        let t = &self.tuning;
        let forward = craft.forward();
        let desired = craft.position - forward * t.follow_distance
            + craft.up() * t.follow_height;
        let look = craft.position + forward * t.look_ahead;

        self.position = exp_approach_vec3(self.position, desired, t.follow_rate, dt);
        self.look_target = exp_approach_vec3(self.look_target, look, t.follow_rate, dt);
    }

    fn update_tour(&mut self, dt: f32) {
        let waypoints = &self.tour.waypoints;
        if waypoints.len() < 2 {
            return;
        }

        self.tour.timer += dt * self.tuning.tour_speed;
        let mut segment = self.tour.timer as usize;
        let mut t = self.tour.timer - segment as f32;
        if segment >= waypoints.len() - 1 {
            // Past the last segment: loop back to the start.
            self.tour.timer = 0.0;
            segment = 0;
            t = 0.0;
        }

        self.position = waypoints[segment].lerp(waypoints[segment + 1], t);
        self.look_target = self.tuning.tour_look_target;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{World, WorldTuning};
    use input::FlightIntents;
    use worldgen::CityLayout;

    const DT: f32 = 1.0 / 60.0;

    fn parked_craft() -> Craft {
        Craft::new(Vec3::new(0.0, 30.0, 0.0))
    }

    fn rig() -> CameraRig {
        CameraRig::new(Vec3::new(0.0, 5.0, 20.0), Vec3::ZERO)
    }

    #[test]
    fn follow_converges_monotonically_on_a_stationary_craft() {
        let craft = parked_craft();
        let mut rig = rig();
        let desired = craft.position - craft.forward() * 20.0 + Vec3::Y * 6.0;

        let mut last = rig.position.distance(desired);
        for _ in 0..300 {
            rig.update(DT, &craft);
            let now = rig.position.distance(desired);
            assert!(now <= last + 1e-6, "distance grew: {last} -> {now}");
            last = now;
        }
        assert!(last < 0.01);
    }

    #[test]
    fn follow_sits_behind_and_above() {
        let craft = parked_craft();
        let mut rig = rig();
        for _ in 0..600 {
            rig.update(DT, &craft);
        }
        // Craft faces -Z, so the camera settles at +Z and above.
        assert!((rig.position - Vec3::new(0.0, 36.0, 20.0)).length() < 0.1);
        assert!((rig.look_target - Vec3::new(0.0, 30.0, -10.0)).length() < 0.1);
    }

    #[test]
    fn tour_loops_back_to_the_first_waypoint() {
        let craft = parked_craft();
        let mut rig = rig();
        rig.start_tour();

        // 4 segments at 0.2 seg/s = 20 s for a full circuit. The step is
        // a power-of-two fraction so the timer accumulates exactly.
        let dt = 0.3125;
        for _ in 0..64 {
            rig.update(dt, &craft);
        }
        assert_eq!(rig.tour.timer, 0.0);
        assert_eq!(rig.position, TOUR_WAYPOINTS[0]);
    }

    #[test]
    fn tour_interpolates_between_waypoints() {
        let craft = parked_craft();
        let mut rig = rig();
        rig.start_tour();

        // Half a segment in: 2.5 s of playback.
        let steps = (2.5 / DT).round() as usize;
        for _ in 0..steps {
            rig.update(DT, &craft);
        }
        let expected = TOUR_WAYPOINTS[0].lerp(TOUR_WAYPOINTS[1], 0.5);
        assert!((rig.position - expected).length() < 1.0);
        assert_eq!(rig.look_target, rig.tuning.tour_look_target);
    }

    #[test]
    fn empty_tour_is_a_noop() {
        let craft = parked_craft();
        let mut rig = rig();
        rig.tour.waypoints.clear();
        rig.start_tour();

        let before = rig.position;
        rig.update(DT, &craft);
        assert_eq!(rig.position, before);
    }

    #[test]
    fn toggling_restarts_the_tour() {
        let craft = parked_craft();
        let mut rig = rig();

        rig.toggle_tour();
        assert!(rig.is_touring());
        for _ in 0..120 {
            rig.update(DT, &craft);
        }
        assert!(rig.tour.timer > 0.0);

        rig.toggle_tour();
        assert!(!rig.is_touring());
        rig.toggle_tour();
        assert_eq!(rig.tour.timer, 0.0, "re-entry restarts playback");
    }

    #[test]
    fn view_is_a_well_formed_look_at() {
        let mut rig = rig();
        rig.position = Vec3::new(0.0, 36.0, 20.0);
        rig.look_target = Vec3::new(0.0, 30.0, -10.0);
        let view = rig.view();
        // The look target lands on the -Z axis in view space.
        let v = view.transform_point3(rig.look_target);
        assert!(v.x.abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
        assert!(v.z < 0.0);
    }

    #[test]
    fn camera_never_rolls_with_the_craft() {
        let world = World::from_layout(
            CityLayout {
                obstacles: Vec::new(),
                spires: Vec::new(),
                buildings: Vec::new(),
                aliens: Vec::new(),
            },
            WorldTuning {
                hazard_count: 0,
                ..WorldTuning::default()
            },
        );
        let mut craft = parked_craft();
        let mut intents = FlightIntents::idle();
        intents.bank_left = true;
        for _ in 0..120 {
            craft.update(DT, &intents, &world);
        }
        assert!(craft.roll_deg > 10.0);

        let mut rig = rig();
        for _ in 0..600 {
            rig.update(DT, &craft);
        }
        // The rig's basis right vector stays level regardless of bank.
        let view = rig.view();
        let right = view.inverse().transform_vector3(Vec3::X);
        assert!(right.y.abs() < 1e-4);
    }
}
