//! Timed self-destruction of knives and trail segments.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::components::{Lifetime, ThrownKnife, TrailSegment};
use super::registry::KnifeRegistry;

/// Expiry is unconditional: a knife that never hit anything still goes away.
pub fn expire_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut registry: ResMut<KnifeRegistry>,
    mut q: Query<(Entity, &mut Lifetime, Option<&ThrownKnife>)>,
) {
    for (e, mut lifetime, knife) in &mut q {
        lifetime.tick(time.delta());
        if !lifetime.is_finished() {
            continue;
        }

        if let Some(knife) = knife {
            registry.unregister(knife.id);
        }
        commands.entity(e).try_despawn();
    }
}

/// Drops entries whose knife was despawned by something other than this plugin.
pub fn forget_despawned_knives(
    mut removed: RemovedComponents<ThrownKnife>,
    mut registry: ResMut<KnifeRegistry>,
) {
    let gone: HashSet<Entity> = removed.read().collect();
    if gone.is_empty() {
        return;
    }
    registry.retain(|_, entry| !gone.contains(&entry.entity));
}

/// Round boundary: every knife and trail goes, along with all registry entries.
pub fn despawn_all_knives(
    commands: &mut Commands,
    registry: &mut KnifeRegistry,
    q_knives: &Query<Entity, Or<(With<ThrownKnife>, With<TrailSegment>)>>,
) {
    registry.clear();
    for e in q_knives {
        commands.entity(e).try_despawn();
    }
}
