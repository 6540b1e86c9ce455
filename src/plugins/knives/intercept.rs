//! Damage interception: credit knife hits to the thrower.
//!
//! A hit counts as ours only if its inflictor is a live physics knife that is still
//! registered. The event is rewritten in place (attacker, weapon, slash, fixed
//! amount), the knife is unregistered and despawned, and a lethal hit refills the
//! thrower's knives. Everything else passes through untouched.

use bevy::ecs::message::MessageMutator;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::config::KnivesConfig;
use crate::plugins::damage::{DamageType, PhysicsProp, TakeDamage, applied_hp};
use crate::plugins::players::components::{Health, Pawn, PlayerController, PlayerSlot, Weapon};
use crate::plugins::players::state::{Ammo, ThrowStates};

use super::components::ThrownKnife;
use super::registry::KnifeRegistry;

/// Lethality is judged against the fixed knife damage, before any later modifier,
/// rounded the same way it is applied.
#[inline]
pub fn is_lethal(health: &Health, damage: f32) -> bool {
    health.hp > 0 && applied_hp(damage) >= health.hp
}

#[allow(clippy::too_many_arguments)]
pub fn intercept_knife_damage(
    mut commands: Commands,
    mut damage: MessageMutator<TakeDamage>,
    config: Res<KnivesConfig>,
    mut registry: ResMut<KnifeRegistry>,
    mut states: ResMut<ThrowStates>,
    q_knives: Query<&ThrownKnife, With<PhysicsProp>>,
    q_pawns: Query<&Pawn>,
    q_controllers: Query<&PlayerController>,
    q_weapons: Query<(), With<Weapon>>,
    q_health: Query<&Health>,
    // Knives consumed earlier in this pass.
    mut spent: Local<HashSet<Entity>>,
) {
    spent.clear();

    for ev in damage.read() {
        let inflictor = ev.info.inflictor;

        if spent.contains(&inflictor) {
            ev.info.amount = 0.0;
            continue;
        }

        let Ok(knife) = q_knives.get(inflictor) else {
            continue;
        };
        let Some(entry) = registry.get(knife.id).copied() else {
            continue;
        };
        if entry.entity != inflictor {
            continue;
        }

        let thrower = q_pawns
            .get(knife.owner)
            .ok()
            .and_then(|pawn| q_controllers.get(pawn.controller).ok().map(|c| (pawn.controller, c)));

        ev.info.inflictor = if thrower.is_some() { knife.owner } else { inflictor };
        ev.info.attacker = thrower.map(|_| knife.owner);
        ev.info.ability = entry.source_weapon.filter(|&w| q_weapons.contains(w));
        ev.info.damage_type = DamageType::Slash;
        ev.info.amount = config.damage;

        if let (Some(limit), Some((controller_e, controller))) = (config.ammo_per_life(), thrower) {
            let lethal = q_health.get(ev.victim).is_ok_and(|h| is_lethal(h, config.damage));
            if lethal {
                match PlayerSlot::new(controller.slot) {
                    Some(slot) => {
                        if let Some(state) = states
                            .get_mut(slot)
                            .filter(|s| s.controller == controller_e)
                        {
                            state.ammo = Ammo::Remaining(limit);
                            info!("Thrown knife kill. Refilled knives for slot {}.", slot.index());
                        }
                    }
                    None => {
                        warn!("Thrown knife kill but invalid attacker slot {}.", controller.slot);
                    }
                }
            }
        }

        registry.unregister(knife.id);
        spent.insert(inflictor);
        commands.entity(inflictor).try_despawn();
    }
}
