//! Feature plugins.

use avian3d::prelude::CollisionStart;
use bevy::prelude::*;

use crate::plugins::knives::KnivesPlugin;

pub mod core;
pub mod damage;
pub mod hud;
pub mod knives;
pub mod physics;
pub mod players;

// Render-only
pub mod debug_draw;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    register_features(app);
}

/// Gameplay without the physics step.
///
/// Collisions have to be injected as `CollisionStart` messages. Used by integration
/// tests that need knives to stay exactly where they were spawned.
pub fn register_logic(app: &mut App) {
    core::plugin(app);
    app.add_message::<CollisionStart>();
    register_features(app);
}

fn register_features(app: &mut App) {
    players::plugin(app);
    hud::plugin(app);
    damage::plugin(app);
    app.add_plugins(KnivesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    debug_draw::plugin(app);
}
