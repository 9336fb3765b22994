//! Static scene dressing near the spawn pad.

use glam::Vec3;

/// A parked, non-colliding drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop {
    pub position: Vec3,
    pub yaw_deg: f32,
}

/// The two wingman drones parked beside the spawn point.
pub fn parked_drones() -> Vec<Prop> {
    vec![
        Prop {
            position: Vec3::new(10.0, 0.5, -10.0),
            yaw_deg: 30.0,
        },
        Prop {
            position: Vec3::new(-10.0, 0.5, -14.0),
            yaw_deg: -20.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parked_drones_sit_inside_the_spawn_clearing() {
        for prop in parked_drones() {
            assert!(prop.position.x.abs() < 200.0);
            assert!(prop.position.z.abs() < 200.0);
        }
    }
}
