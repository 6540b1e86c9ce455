//! Thrown knives plugin.
//!
//! # Data flow
//! ```text
//!   PreUpdate
//!     RoundStarted        -> despawn knives + trails, clear KnifeRegistry
//!
//!   Update
//!     throw_knives        PlayerButtonsChanged(ATTACK) -> knife entity + registry entry
//!     expire_lifetimes    Lifetime finished            -> despawn (+ unregister)
//!     draw_knife_trails   moved > min distance         -> TrailSegment, last_position
//!
//!   PostUpdate (DamageSystems::Intercept)
//!     intercept_knife_damage  TakeDamage from a registered knife -> rewritten, knife gone
//!
//!   Last
//!     forget_despawned_knives  registry follows despawns from anywhere else
//! ```
//!
//! The registry is the single link between a knife entity and the weapon it came
//! from. Every path that removes a knife also removes its entry, and removing an
//! absent entry is a no-op, so racing removals are harmless.

pub mod catalog;
pub mod components;
pub mod intercept;
pub mod lifetime;
pub mod registry;
pub mod throw;
pub mod trail;

use bevy::prelude::*;

use crate::common::state::KnivesState;
use crate::plugins::damage::DamageSystems;
use crate::plugins::players::messages::RoundStarted;

use components::{ThrownKnife, TrailSegment};

pub struct KnivesPlugin;

impl Plugin for KnivesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<registry::KnifeRegistry>()
            .init_resource::<catalog::KnifeModelCatalog>();

        app.add_systems(
            PreUpdate,
            clear_knives_on_round_start.run_if(in_state(KnivesState::Loaded)),
        )
        .add_systems(OnExit(KnivesState::Loaded), unload_knives);

        app.add_systems(
            Update,
            (
                throw::throw_knives,
                lifetime::expire_lifetimes,
                trail::draw_knife_trails.run_if(trail::trails_enabled),
            )
                .chain()
                .run_if(in_state(KnivesState::Loaded)),
        );

        app.add_systems(
            PostUpdate,
            intercept::intercept_knife_damage.in_set(DamageSystems::Intercept),
        )
        .add_systems(Last, lifetime::forget_despawned_knives);
    }
}

pub fn clear_knives_on_round_start(
    mut commands: Commands,
    mut rounds: MessageReader<RoundStarted>,
    mut registry: ResMut<registry::KnifeRegistry>,
    q_knives: Query<Entity, Or<(With<ThrownKnife>, With<TrailSegment>)>>,
) {
    if rounds.read().count() == 0 {
        return;
    }
    lifetime::despawn_all_knives(&mut commands, &mut registry, &q_knives);
}

pub fn unload_knives(
    mut commands: Commands,
    mut registry: ResMut<registry::KnifeRegistry>,
    q_knives: Query<Entity, Or<(With<ThrownKnife>, With<TrailSegment>)>>,
) {
    lifetime::despawn_all_knives(&mut commands, &mut registry, &q_knives);
}
