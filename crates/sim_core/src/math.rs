//! Small geometry helpers used by flight, collision, and camera code.

use glam::Vec3;

/// Distance between two points ignoring the Y axis.
///
/// Building and spire hits are cylinder tests, so height is handled
/// separately by the caller.
pub fn dist_xz(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// True when two spheres overlap. Touching spheres do not count.
pub fn spheres_overlap(a_pos: Vec3, a_radius: f32, b_pos: Vec3, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}

/// Move `current` toward `target` with a time-corrected exponential step.
///
/// `rate` is the decay constant in 1/s. The step is invariant under
/// subdivision of `dt` (two half steps land where one full step does) and
/// never overshoots the target.
pub fn exp_approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Vector form of [`exp_approach`].
pub fn exp_approach_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_xz_ignores_height() {
        let a = Vec3::new(0.0, 100.0, 0.0);
        let b = Vec3::new(3.0, -50.0, 4.0);
        assert!((dist_xz(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn touching_spheres_do_not_overlap() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, 0.0);
        assert!(!spheres_overlap(a, 4.0, b, 6.0));
        assert!(spheres_overlap(a, 4.01, b, 6.0));
    }

    #[test]
    fn exp_approach_is_step_invariant() {
        let one_step = exp_approach(0.0, 10.0, 4.0, 0.1);
        let half = exp_approach(0.0, 10.0, 4.0, 0.05);
        let two_steps = exp_approach(half, 10.0, 4.0, 0.05);
        assert!((one_step - two_steps).abs() < 1e-4);
    }

    #[test]
    fn exp_approach_never_overshoots() {
        let mut v = 0.0;
        for _ in 0..1000 {
            v = exp_approach(v, 50.0, 8.0, 0.25);
            assert!(v <= 50.0);
        }
        assert!((v - 50.0).abs() < 1e-3);
    }
}
