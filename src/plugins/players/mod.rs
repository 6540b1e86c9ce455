//! Player session plugin.
//!
//! Pipeline:
//! - connect: compute permission, hand out ammo
//! - disconnect: drop the slot's state (cancels its display task)
//! - round start: full ammo, no cooldown, HUD channel cleared
//! - config change: recompute cached permissions
//!
//! Entering `KnivesState::Loaded` seeds every connected human, leaving it drops all state.

use bevy::prelude::*;

use crate::common::config::KnivesConfig;
use crate::common::state::KnivesState;
use crate::plugins::hud::{GameHud, HudCapability, cooldown_channel};

pub mod components;
pub mod messages;
pub mod permissions;
pub mod state;

use components::{PlayerController, PlayerSlot};
use messages::{PlayerButtonsChanged, PlayerConnected, PlayerDisconnected, RoundStarted};
use permissions::{PlayerPermissions, has_permission};
use state::{Ammo, PlayerThrowState, ThrowStates};

pub fn plugin(app: &mut App) {
    app.init_resource::<ThrowStates>()
        .add_message::<PlayerConnected>()
        .add_message::<PlayerDisconnected>()
        .add_message::<RoundStarted>()
        .add_message::<PlayerButtonsChanged>()
        .add_systems(OnEnter(KnivesState::Loaded), seed_connected_players)
        .add_systems(OnExit(KnivesState::Loaded), drop_all_players)
        .add_systems(
            PreUpdate,
            (
                refresh_permissions.run_if(resource_changed::<KnivesConfig>),
                on_player_connected,
                on_player_disconnected,
                reset_players_on_round_start,
            )
                .chain()
                .run_if(in_state(KnivesState::Loaded)),
        );
}

fn fresh_state(
    controller: Entity,
    perms: Option<&PlayerPermissions>,
    config: &KnivesConfig,
) -> PlayerThrowState {
    PlayerThrowState::new(
        controller,
        has_permission(perms, &config.flags),
        Ammo::per_life(config.ammo_per_life()),
    )
}

pub fn seed_connected_players(
    config: Res<KnivesConfig>,
    mut states: ResMut<ThrowStates>,
    q_controllers: Query<(Entity, &PlayerController, Option<&PlayerPermissions>)>,
) {
    for (e, controller, perms) in &q_controllers {
        if !controller.is_connected_human() {
            continue;
        }
        let Some(slot) = PlayerSlot::new(controller.slot) else {
            continue;
        };
        states.insert(slot, fresh_state(e, perms, &config));
    }
}

pub fn drop_all_players(mut states: ResMut<ThrowStates>) {
    states.clear();
}

pub fn on_player_connected(
    mut connected: MessageReader<PlayerConnected>,
    config: Res<KnivesConfig>,
    mut states: ResMut<ThrowStates>,
    q_controllers: Query<(&PlayerController, Option<&PlayerPermissions>)>,
) {
    for ev in connected.read() {
        let Ok((controller, perms)) = q_controllers.get(ev.controller) else {
            continue;
        };
        if !controller.is_connected_human() {
            continue;
        }
        let Some(slot) = PlayerSlot::new(controller.slot) else {
            debug!("Ignoring connect for out-of-range slot {}", controller.slot);
            continue;
        };
        states.insert(slot, fresh_state(ev.controller, perms, &config));
    }
}

pub fn on_player_disconnected(
    mut disconnected: MessageReader<PlayerDisconnected>,
    mut states: ResMut<ThrowStates>,
) {
    for ev in disconnected.read() {
        let Some(slot) = PlayerSlot::new(ev.slot) else {
            continue;
        };
        // A later connect may already own the slot.
        if states.get(slot).is_some_and(|s| s.controller == ev.controller) {
            states.remove(slot);
        }
    }
}

pub fn reset_players_on_round_start(
    mut rounds: MessageReader<RoundStarted>,
    config: Res<KnivesConfig>,
    capability: Res<HudCapability>,
    mut hud: Option<ResMut<GameHud>>,
    mut states: ResMut<ThrowStates>,
    q_controllers: Query<&PlayerController>,
) {
    if rounds.read().count() == 0 {
        return;
    }

    let ammo = Ammo::per_life(config.ammo_per_life());
    let channel = cooldown_channel(*capability, &config);

    for (_, state) in states.iter_mut() {
        state.reset_for_round(ammo);

        let connected = q_controllers
            .get(state.controller)
            .is_ok_and(PlayerController::is_connected_human);
        if let (true, Some(channel), Some(hud)) = (connected, channel, hud.as_deref_mut()) {
            hud.0.remove(state.controller, channel);
        }
    }
}

pub fn refresh_permissions(
    config: Res<KnivesConfig>,
    mut states: ResMut<ThrowStates>,
    q_perms: Query<Option<&PlayerPermissions>, With<PlayerController>>,
) {
    for (_, state) in states.iter_mut() {
        if let Ok(perms) = q_perms.get(state.controller) {
            state.has_permission = has_permission(perms, &config.flags);
        }
    }
}
