//! Fire cadence for the drone's cannon.

/// Cooldown gate between shots. The bullet itself lives in the world.
#[derive(Debug, Clone)]
pub struct Weapon {
    /// Seconds between shots.
    pub fire_cooldown: f32,
    cooldown_timer: f32,
}

impl Weapon {
    pub fn new(fire_cooldown: f32) -> Self {
        Self {
            fire_cooldown,
            cooldown_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.cooldown_timer > 0.0 {
            self.cooldown_timer -= dt;
        }
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    /// Try to fire. Returns whether a shot was released and arms the
    /// cooldown when it was.
    pub fn fire(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.cooldown_timer = self.fire_cooldown;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_limits_shots_to_cooldown_rate() {
        let mut weapon = Weapon::new(0.15);
        let dt = 1.0 / 60.0;
        let mut shots = 0;
        // Hold fire for one second.
        for _ in 0..60 {
            weapon.update(dt);
            if weapon.fire() {
                shots += 1;
            }
        }
        // One immediate shot plus one per elapsed cooldown.
        assert!((6..=7).contains(&shots), "got {shots} shots");
    }

    #[test]
    fn fire_fails_until_cooldown_expires() {
        let mut weapon = Weapon::new(0.5);
        assert!(weapon.fire());
        assert!(!weapon.fire());
        weapon.update(0.4);
        assert!(!weapon.can_fire());
        weapon.update(0.2);
        assert!(weapon.fire());
    }
}
