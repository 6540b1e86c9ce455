//! Fixed gameplay constants that are not part of the operator config file.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Distance in front of the eye where a knife appears.
    pub spawn_distance: f32,
    /// Sideways nudge (+Y) so the knife does not spawn inside the thrower.
    pub spawn_lateral_offset: f32,
    /// Vertical lift (+Z) from the pawn origin up to roughly eye height.
    pub spawn_vertical_offset: f32,
    /// Added to the vertical velocity to counter the initial gravity drop.
    pub upward_boost: f32,
    /// Trail segments are only drawn once a knife moved further than this.
    pub trail_min_distance: f32,
    pub trail_width: f32,
    pub hud_refresh: Duration,
    /// Host physics damage per unit of impact speed.
    pub impact_damage_per_speed: f32,
    /// Full extents of the knife collider.
    pub knife_extents: Vec3,
    pub gravity: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            spawn_distance: 64.0,
            spawn_lateral_offset: 5.0,
            spawn_vertical_offset: 50.0,
            upward_boost: 300.0,
            trail_min_distance: 5.0,
            trail_width: 1.0,
            hud_refresh: Duration::from_millis(100),
            impact_damage_per_speed: 0.01,
            knife_extents: Vec3::new(12.0, 2.0, 1.0),
            gravity: 800.0,
        }
    }
}
