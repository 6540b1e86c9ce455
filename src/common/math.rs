//! Aim and trajectory helpers. The world is Z-up.

use bevy::prelude::*;

use super::tunables::Tunables;

/// Unit forward vector for view angles given in degrees.
///
/// Positive pitch looks down, yaw rotates counter-clockwise around +Z from +X.
#[inline]
pub fn forward_from_view(pitch_deg: f32, yaw_deg: f32) -> Vec3 {
    let pitch = pitch_deg.to_radians();
    let yaw = yaw_deg.to_radians();
    Vec3::new(pitch.cos() * yaw.cos(), pitch.cos() * yaw.sin(), -pitch.sin())
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}

/// Spawn position and initial velocity of a throw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Launch {
    pub fn from_aim(origin: Vec3, forward: Vec3, speed: f32, tunables: &Tunables) -> Self {
        let offset = Vec3::new(0.0, tunables.spawn_lateral_offset, tunables.spawn_vertical_offset);
        Self {
            position: origin + forward * tunables.spawn_distance + offset,
            velocity: forward * speed + Vec3::Z * tunables.upward_boost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn level_aim_points_along_yaw() {
        assert!(approx(forward_from_view(0.0, 0.0), Vec3::X));
        assert!(approx(forward_from_view(0.0, 90.0), Vec3::Y));
        assert!(approx(forward_from_view(0.0, 180.0), Vec3::NEG_X));
    }

    #[test]
    fn positive_pitch_looks_down() {
        assert!(approx(forward_from_view(90.0, 0.0), Vec3::NEG_Z));
        assert!(approx(forward_from_view(-90.0, 37.0), Vec3::Z));

        let f = forward_from_view(30.0, 45.0);
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!(f.z < 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(distance(Vec3::ONE, Vec3::ONE), 0.0);
    }

    #[test]
    fn launch_offsets_position_and_lifts_velocity() {
        let tunables = Tunables::default();
        let launch = Launch::from_aim(Vec3::new(100.0, 0.0, 0.0), Vec3::X, 2250.0, &tunables);

        assert!(approx(launch.position, Vec3::new(164.0, 5.0, 50.0)));
        assert!(approx(launch.velocity, Vec3::new(2250.0, 0.0, 300.0)));
    }
}
