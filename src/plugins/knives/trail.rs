//! Trail segments behind flying knives.
//!
//! Sampled once per frame but only emitted after the knife moved further than
//! `Tunables::trail_min_distance`, which keeps beam entities to a handful per throw.

use bevy::prelude::*;

use crate::common::config::KnivesConfig;
use crate::common::math::distance;
use crate::common::tunables::Tunables;
use crate::plugins::damage::PhysicsProp;
use crate::plugins::players::components::{Pawn, PlayerController, Team};

use super::components::{Lifetime, ThrownKnife, TrailSegment};
use super::registry::KnifeRegistry;

#[inline]
pub fn should_extend_trail(current: Vec3, last: Vec3, min_distance: f32) -> bool {
    distance(current, last) > min_distance
}

#[inline]
pub fn team_color(team: Team) -> Color {
    match team {
        Team::CounterTerrorist => Color::srgb(0.0, 0.0, 1.0),
        _ => Color::srgb(1.0, 0.0, 0.0),
    }
}

pub fn trails_enabled(config: Res<KnivesConfig>) -> bool {
    config.trails_enabled()
}

pub fn draw_knife_trails(
    mut commands: Commands,
    config: Res<KnivesConfig>,
    tunables: Res<Tunables>,
    mut registry: ResMut<KnifeRegistry>,
    q_knives: Query<(&ThrownKnife, &Transform), With<PhysicsProp>>,
    q_pawns: Query<&Pawn>,
    q_controllers: Query<&PlayerController>,
) {
    for (knife, tf) in &q_knives {
        let Some(entry) = registry.get_mut(knife.id) else {
            continue;
        };

        let current = tf.translation;
        if !should_extend_trail(current, entry.last_position, tunables.trail_min_distance) {
            continue;
        }

        let Ok(pawn) = q_pawns.get(knife.owner) else {
            continue;
        };
        let Ok(owner) = q_controllers.get(pawn.controller) else {
            continue;
        };

        commands.spawn((
            Name::new("KnifeTrail"),
            TrailSegment {
                start: entry.last_position,
                end: current,
                color: team_color(owner.team),
                width: tunables.trail_width,
            },
            Lifetime::new(config.trail_time()),
        ));
        entry.last_position = current;
    }
}
