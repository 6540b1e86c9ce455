//! Host damage pipeline.
//!
//! ```text
//!   PostUpdate
//!   Detect:    CollisionStart (prop <-> pawn with Health)  -> TakeDamage
//!   Intercept: hooks may rewrite TakeDamage in place       (MessageMutator)
//!   Apply:     TakeDamage -> Health
//! ```
//!
//! Interceptors run strictly between detection and application, so whatever they
//! write is what gets applied. They never drop a message; zeroing the amount is the
//! only way to cancel one.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::state::KnivesState;
use crate::common::tunables::Tunables;
use crate::plugins::players::components::{Health, Pawn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DamageType {
    #[default]
    Generic,
    Crush,
    Slash,
    Bullet,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageInfo {
    pub inflictor: Entity,
    pub attacker: Option<Entity>,
    /// Weapon or ability credited with the damage.
    pub ability: Option<Entity>,
    pub damage_type: DamageType,
    pub amount: f32,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct TakeDamage {
    pub victim: Entity,
    pub info: DamageInfo,
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageSystems {
    Detect,
    Intercept,
    Apply,
}

/// Entities the physics simulation may hurt players with.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PhysicsProp;

pub fn plugin(app: &mut App) {
    app.add_message::<TakeDamage>()
        .configure_sets(
            PostUpdate,
            (DamageSystems::Detect, DamageSystems::Intercept, DamageSystems::Apply)
                .chain()
                .run_if(in_state(KnivesState::Loaded)),
        )
        .add_systems(
            PostUpdate,
            (
                emit_impact_damage.in_set(DamageSystems::Detect),
                apply_damage.in_set(DamageSystems::Apply),
            ),
        );
}

/// Physics props hitting a pawn deal crush damage scaled by their speed.
pub fn emit_impact_damage(
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    q_props: Query<Option<&LinearVelocity>, With<PhysicsProp>>,
    q_victims: Query<(), (With<Pawn>, With<Health>)>,
    mut writer: MessageWriter<TakeDamage>,
) {
    for ev in started.read() {
        let (prop, victim) = if q_props.contains(ev.collider1) && q_victims.contains(ev.collider2) {
            (ev.collider1, ev.collider2)
        } else if q_props.contains(ev.collider2) && q_victims.contains(ev.collider1) {
            (ev.collider2, ev.collider1)
        } else {
            continue;
        };

        let Ok(velocity) = q_props.get(prop) else {
            continue;
        };
        let speed = velocity.map_or(0.0, |v| v.0.length());

        writer.write(TakeDamage {
            victim,
            info: DamageInfo {
                inflictor: prop,
                attacker: Some(prop),
                ability: None,
                damage_type: DamageType::Crush,
                amount: speed * tunables.impact_damage_per_speed,
            },
        });
    }
}

/// Health actually removed by a damage amount.
#[inline]
pub fn applied_hp(amount: f32) -> i32 {
    amount.round() as i32
}

pub fn apply_damage(mut damage: MessageReader<TakeDamage>, mut q_health: Query<&mut Health>) {
    for ev in damage.read() {
        let Ok(mut health) = q_health.get_mut(ev.victim) else {
            continue;
        };
        let amount = applied_hp(ev.info.amount);
        if amount <= 0 {
            continue;
        }
        health.hp = (health.hp - amount).max(0);
    }
}

#[cfg(test)]
mod tests;
