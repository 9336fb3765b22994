//! The player drone: a two-state flight controller.
//!
//! Flying integrates control intents into yaw/pitch/roll and a proposed
//! displacement, and only commits the displacement when the world says
//! both the destination and the committed position are clear. Any hit
//! flips the craft into the crashed state, where it ignores input and
//! tumbles under gravity until it reaches the ground and respawns in
//! place.

use crate::world::World;
use glam::{EulerRot, Quat, Vec3};
use input::FlightIntents;
use sim_core::exp_approach;

/// Named flight-model constants.
#[derive(Debug, Clone)]
pub struct CraftTuning {
    /// Forward/backward speed, units/s.
    pub move_speed: f32,
    /// Yaw rate from turn intents, degrees/s.
    pub rotation_speed: f32,
    /// Climb/descend speed, units/s.
    pub lift_speed: f32,
    /// Smoothing rate for the cosmetic climb tilt, 1/s.
    pub tilt_rate: f32,
    /// Smoothing rate pulling roll toward its banking target, 1/s.
    pub roll_rate: f32,
    /// Yaw degrees/s contributed at full bank (bank-to-turn coupling).
    pub turn_factor: f32,
    /// Pitch rate from pitch intents, degrees/s.
    pub pitch_rate: f32,
    pub boost_multiplier: f32,
    /// Roll target while a bank intent is held, degrees.
    pub bank_angle: f32,
    /// Banking is mostly suppressed while a lift intent is held.
    pub hover_roll_damping: f32,
    /// Cosmetic tilt target during lift input, degrees.
    pub lift_tilt_deg: f32,
    /// Minimum flight height; also the crash landing height.
    pub ground_height: f32,
    pub collision_radius: f32,
    pub crash_gravity: f32,
    /// Tumble rates while falling, degrees/s.
    pub crash_spin_pitch: f32,
    pub crash_spin_roll: f32,
    /// Hard pitch clamp; keeps the basis away from gimbal lock.
    pub pitch_limit_deg: f32,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            move_speed: 60.0,
            rotation_speed: 40.0,
            lift_speed: 30.0,
            tilt_rate: 5.0,
            roll_rate: 4.0,
            turn_factor: 60.0,
            pitch_rate: 50.0,
            boost_multiplier: 2.0,
            bank_angle: 50.0,
            hover_roll_damping: 0.2,
            lift_tilt_deg: 45.0,
            ground_height: 2.0,
            collision_radius: 0.5,
            crash_gravity: 20.0,
            crash_spin_pitch: 100.0,
            crash_spin_roll: 200.0,
            pitch_limit_deg: 89.0,
        }
    }
}

/// Flight state for the player drone.
#[derive(Debug, Clone)]
pub struct Craft {
    pub position: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub roll_deg: f32,
    /// Cosmetic nose tilt during climbs; never feeds the flight basis.
    pub visual_tilt_deg: f32,
    pub vertical_velocity: f32,
    pub crashed: bool,
    pub boosting: bool,
    pub tuning: CraftTuning,
}

impl Craft {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
            visual_tilt_deg: 0.0,
            vertical_velocity: 0.0,
            crashed: false,
            boosting: false,
            tuning: CraftTuning::default(),
        }
    }

    /// Advance one tick.
    pub fn update(&mut self, dt: f32, intents: &FlightIntents, world: &World) {
        if self.crashed {
            self.fall(dt);
            // Input stays ignored for the whole crashed frame, including
            // the frame that lands.
            return;
        }
        self.fly(dt, intents, world);
    }

    fn fall(&mut self, dt: f32) {
        let t = &self.tuning;
        self.vertical_velocity -= t.crash_gravity * dt;
        self.position.y += self.vertical_velocity * dt;
        self.pitch_deg += t.crash_spin_pitch * dt;
        self.roll_deg += t.crash_spin_roll * dt;

        if self.position.y < t.ground_height {
            self.position.y = t.ground_height;
            self.crashed = false;
            self.vertical_velocity = 0.0;
            self.pitch_deg = 0.0;
            self.roll_deg = 0.0;
            self.visual_tilt_deg = 0.0;
            log::info!("craft recovered at {:?}", self.position);
        }
    }

    fn fly(&mut self, dt: f32, intents: &FlightIntents, world: &World) {
        let t = self.tuning.clone();
        self.boosting = intents.boost;
        let boost = if intents.boost { t.boost_multiplier } else { 1.0 };

        // Direct rotation from intents. Positive yaw turns left, positive
        // roll banks left.
        if intents.yaw_left {
            self.yaw_deg += t.rotation_speed * dt;
        }
        if intents.yaw_right {
            self.yaw_deg -= t.rotation_speed * dt;
        }
        if intents.pitch_up {
            self.pitch_deg += t.pitch_rate * dt;
        }
        if intents.pitch_down {
            self.pitch_deg -= t.pitch_rate * dt;
        }
        self.pitch_deg = self.pitch_deg.clamp(-t.pitch_limit_deg, t.pitch_limit_deg);

        let mut target_roll = 0.0;
        if intents.bank_left {
            target_roll = t.bank_angle;
        }
        if intents.bank_right {
            target_roll = -t.bank_angle;
        }

        let mut proposed = Vec3::ZERO;
        let mut target_tilt = 0.0;
        if intents.lift_up {
            proposed.y += t.lift_speed * boost;
            target_tilt = t.lift_tilt_deg;
        }
        if intents.lift_down {
            proposed.y -= t.lift_speed * boost;
            target_tilt = -t.lift_tilt_deg;
        }
        if intents.lift_up || intents.lift_down {
            // Hovering with a full bank is unflyable; damp the target.
            target_roll *= t.hover_roll_damping;
        }

        self.roll_deg = exp_approach(self.roll_deg, target_roll, t.roll_rate, dt);
        // Bank-to-turn: the current bank contributes its share of yaw.
        self.yaw_deg += (self.roll_deg / t.bank_angle) * t.turn_factor * dt;

        let forward = self.forward();
        if intents.forward {
            proposed += forward * t.move_speed * boost;
        }
        if intents.backward {
            proposed -= forward * t.move_speed * boost;
        }

        // The destination must be clear, and so must the spot we are
        // leaving: a hazard may have orbited onto the resting craft.
        let next = self.position + proposed * dt;
        if world.check_collision(next, t.collision_radius)
            || world.check_collision(self.position, t.collision_radius)
        {
            self.enter_crash(proposed, dt);
            return;
        }
        self.position = next;

        self.visual_tilt_deg = exp_approach(self.visual_tilt_deg, target_tilt, t.tilt_rate, dt);
        self.position.y = self.position.y.max(t.ground_height);
    }

    fn enter_crash(&mut self, proposed: Vec3, dt: f32) {
        self.crashed = true;
        self.vertical_velocity = 0.0;
        // Push back out of the surface, double the step that hit.
        self.position -= proposed * dt * 2.0;
        log::info!("craft crashed at {:?}", self.position);
    }

    /// Flight direction from the full yaw/pitch/roll basis. Visual tilt
    /// is excluded on purpose.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * -Vec3::Z
    }

    /// World up. Deliberately not roll-dependent so the camera never
    /// rolls with the craft.
    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Flight-basis rotation (no visual tilt).
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_deg.to_radians(),
            self.pitch_deg.to_radians(),
            self.roll_deg.to_radians(),
        )
    }

    /// Rotation used for drawing: flight basis plus the cosmetic tilt.
    pub fn render_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_deg.to_radians(),
            (self.pitch_deg + self.visual_tilt_deg).to_radians(),
            self.roll_deg.to_radians(),
        )
    }
}
