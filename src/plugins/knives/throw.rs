//! Throw action: attack press with a knife in hand → physics knife in the world.
//!
//! Every check happens before anything is spawned or mutated, so a denied throw
//! leaves no trace besides a debug log line.

use std::time::Duration;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::config::KnivesConfig;
use crate::common::layers::thrown_knife_layers;
use crate::common::math::{Launch, forward_from_view};
use crate::common::tunables::Tunables;
use crate::plugins::damage::PhysicsProp;
use crate::plugins::hud::{CooldownDisplay, HudCapability, cooldown_channel};
use crate::plugins::players::components::{
    ActiveWeapon, EyeAngles, Pawn, PlayerController, PlayerSlot, Team, Weapon,
};
use crate::plugins::players::messages::{PlayerButtons, PlayerButtonsChanged};
use crate::plugins::players::state::{PlayerThrowState, ThrowDenied, ThrowStates};

use super::catalog::KnifeModelCatalog;
use super::components::{Lifetime, PropModel, ThrownKnife};
use super::registry::{KnifeEntry, KnifeRegistry};

/// Everything needed to spawn one knife, resolved up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowPlan {
    pub pawn: Entity,
    pub source_weapon: Option<Entity>,
    pub model: &'static str,
    pub rotation: Quat,
    pub launch: Launch,
}

/// Item definition to pick a model for: the held weapon, else the team's stock knife.
#[inline]
pub fn knife_item(weapon: Option<&Weapon>, team: Team) -> u16 {
    weapon.map_or(team.default_knife(), |w| w.item_definition)
}

#[allow(clippy::too_many_arguments)]
fn plan_throw(
    controller: &PlayerController,
    state: &PlayerThrowState,
    now: Duration,
    config: &KnivesConfig,
    tunables: &Tunables,
    catalog: &KnifeModelCatalog,
    q_pawns: &Query<(&Transform, &EyeAngles, Option<&ActiveWeapon>), With<Pawn>>,
    q_weapons: &Query<&Weapon>,
) -> Result<ThrowPlan, ThrowDenied> {
    if !state.has_permission {
        return Err(ThrowDenied::NotPermitted);
    }

    let pawn = controller.pawn.ok_or(ThrowDenied::NoPawn)?;
    let (tf, angles, active) = q_pawns.get(pawn).map_err(|_| ThrowDenied::NoPawn)?;

    let weapon = active
        .and_then(|a| a.0)
        .and_then(|e| q_weapons.get(e).ok().map(|w| (e, w)));
    if !weapon.is_some_and(|(_, w)| w.is_melee()) {
        return Err(ThrowDenied::NotMelee);
    }

    state.check_ready(now, config.cooldown(), config.ammo_per_life())?;

    let item = knife_item(weapon.map(|(_, w)| w), controller.team);
    let model = catalog.model_for(item).ok_or(ThrowDenied::UnknownModel(item))?;

    let forward = forward_from_view(angles.pitch, angles.yaw);
    Ok(ThrowPlan {
        pawn,
        source_weapon: weapon.map(|(e, _)| e),
        model,
        rotation: tf.rotation,
        launch: Launch::from_aim(tf.translation, forward, config.velocity, tunables),
    })
}

/// Spawns the knife and registers it. Returns the knife entity.
pub fn spawn_knife(
    commands: &mut Commands,
    registry: &mut KnifeRegistry,
    plan: &ThrowPlan,
    config: &KnivesConfig,
    tunables: &Tunables,
) -> Entity {
    let id = registry.allocate_id();
    let extents = tunables.knife_extents;

    let entity = commands
        .spawn((
            Name::new(id.to_string()),
            ThrownKnife { id, owner: plan.pawn },
            PhysicsProp,
            PropModel(plan.model),
            Transform::from_translation(plan.launch.position).with_rotation(plan.rotation),
            RigidBody::Dynamic,
            Collider::cuboid(extents.x, extents.y, extents.z),
            thrown_knife_layers(),
            Restitution::new(config.elasticity),
            LinearVelocity(plan.launch.velocity),
            // Avian only emits CollisionStart if one of the colliders opts in.
            CollisionEventsEnabled,
            Lifetime::new(config.lifetime()),
        ))
        .id();

    registry.register(
        id,
        KnifeEntry {
            entity,
            source_weapon: plan.source_weapon,
            last_position: plan.launch.position,
        },
    );

    entity
}

#[allow(clippy::too_many_arguments)]
pub fn throw_knives(
    mut commands: Commands,
    mut buttons: MessageReader<PlayerButtonsChanged>,
    time: Res<Time>,
    config: Res<KnivesConfig>,
    tunables: Res<Tunables>,
    catalog: Res<KnifeModelCatalog>,
    capability: Res<HudCapability>,
    mut states: ResMut<ThrowStates>,
    mut registry: ResMut<KnifeRegistry>,
    q_controllers: Query<&PlayerController>,
    q_pawns: Query<(&Transform, &EyeAngles, Option<&ActiveWeapon>), With<Pawn>>,
    q_weapons: Query<&Weapon>,
) {
    let now = time.elapsed();
    let hud_channel = cooldown_channel(*capability, &config);

    for ev in buttons.read() {
        if !ev.pressed.contains(PlayerButtons::ATTACK) {
            continue;
        }

        let Ok(controller) = q_controllers.get(ev.controller) else {
            continue;
        };
        let Some(slot) = PlayerSlot::new(controller.slot) else {
            continue;
        };
        let Some(state) = states.get_mut(slot) else {
            continue;
        };

        let plan = match plan_throw(
            controller, state, now, &config, &tunables, &catalog, &q_pawns, &q_weapons,
        ) {
            Ok(plan) => plan,
            Err(denied) => {
                debug!("Slot {} did not throw: {denied}", slot.index());
                continue;
            }
        };

        let knife = spawn_knife(&mut commands, &mut registry, &plan, &config, &tunables);
        state.record_throw(now, config.ammo_per_life());

        if hud_channel.is_some() {
            state.replace_cooldown_display(CooldownDisplay::start(
                ev.controller,
                now,
                tunables.hud_refresh,
            ));
        }

        debug!("Slot {} threw knife {knife:?}", slot.index());
    }
}
