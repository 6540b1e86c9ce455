use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy::prelude::*;

use crate::common::config::KnivesConfig;
use crate::common::test_utils::{advance_time, run_system_once};
use crate::plugins::players::components::{ConnectionState, PlayerController, PlayerSlot, Team};
use crate::plugins::players::state::{Ammo, PlayerThrowState, ThrowStates};

use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum HudCall {
    SetParams { player: Entity, channel: u8 },
    Show { player: Entity, channel: u8, text: String },
    Remove { player: Entity, channel: u8 },
}

/// Overlay that records every call into a shared log.
#[derive(Clone, Default)]
pub struct RecordingHud(pub Arc<Mutex<Vec<HudCall>>>);

impl RecordingHud {
    pub fn calls(&self) -> Vec<HudCall> {
        self.0.lock().unwrap().clone()
    }
}

impl HudOverlay for RecordingHud {
    fn set_params(&mut self, player: Entity, channel: u8, _params: &HudParams) {
        self.0.lock().unwrap().push(HudCall::SetParams { player, channel });
    }

    fn show(&mut self, player: Entity, channel: u8, text: &str, _duration: f32) {
        self.0.lock().unwrap().push(HudCall::Show { player, channel, text: text.to_owned() });
    }

    fn remove(&mut self, player: Entity, channel: u8) {
        self.0.lock().unwrap().push(HudCall::Remove { player, channel });
    }
}

fn slot(raw: i32) -> PlayerSlot {
    PlayerSlot::new(raw).unwrap()
}

/// World with one connected player whose cooldown display started at t = 0.
fn world_with_display(hud: Option<RecordingHud>) -> (World, Entity) {
    let mut world = World::new();
    advance_time(&mut world, Duration::ZERO);
    world.insert_resource(KnivesConfig { cooldown: 1.0, ..default() });

    let controller = world.spawn(PlayerController::human(0, Team::Terrorist)).id();

    let mut state = PlayerThrowState::new(controller, true, Ammo::Unlimited);
    state.last_throw = Some(Duration::ZERO);
    state.replace_cooldown_display(CooldownDisplay::start(
        controller,
        Duration::ZERO,
        Duration::from_millis(100),
    ));
    let mut states = ThrowStates::default();
    states.insert(slot(0), state);
    world.insert_resource(states);

    match hud {
        Some(hud) => {
            world.insert_resource(GameHud(Box::new(hud)));
            world.insert_resource(HudCapability::Available);
        }
        None => world.insert_resource(HudCapability::Unavailable),
    }

    (world, controller)
}

fn display_status(world: &World) -> Option<TaskStatus> {
    world
        .resource::<ThrowStates>()
        .get(slot(0))
        .and_then(|s| s.cooldown_display.as_ref())
        .map(CooldownDisplay::status)
}

#[test]
fn negotiate_without_overlay_marks_unavailable() {
    let mut world = World::new();
    run_system_once(&mut world, negotiate_hud);
    assert_eq!(*world.resource::<HudCapability>(), HudCapability::Unavailable);
}

#[test]
fn negotiate_with_overlay_marks_available() {
    let mut world = World::new();
    world.insert_resource(GameHud(Box::new(RecordingHud::default())));
    run_system_once(&mut world, negotiate_hud);
    assert_eq!(*world.resource::<HudCapability>(), HudCapability::Available);
}

#[test]
fn cooldown_channel_requires_capability_and_channel() {
    let config = KnivesConfig::default();
    assert_eq!(cooldown_channel(HudCapability::Available, &config), Some(1));
    assert_eq!(cooldown_channel(HudCapability::Unavailable, &config), None);

    let disabled = KnivesConfig { hud_channel: -1, ..default() };
    assert_eq!(cooldown_channel(HudCapability::Available, &disabled), None);
}

#[test]
fn cancel_is_tri_state() {
    let mut display = CooldownDisplay::start(Entity::PLACEHOLDER, Duration::ZERO, Duration::from_millis(100));
    assert_eq!(display.status(), TaskStatus::Running);

    assert!(display.cancel());
    assert_eq!(display.status(), TaskStatus::Canceled);

    // Second cancel is a no-op.
    assert!(!display.cancel());
    assert_eq!(display.status(), TaskStatus::Canceled);

    // A canceled task never becomes completed.
    display.complete();
    assert_eq!(display.status(), TaskStatus::Canceled);
}

#[test]
fn refresh_shows_remaining_time_on_each_interval() {
    let hud = RecordingHud::default();
    let (mut world, controller) = world_with_display(Some(hud.clone()));

    // Not a full interval yet: nothing drawn.
    advance_time(&mut world, Duration::from_millis(50));
    run_system_once(&mut world, refresh_cooldown_displays);
    assert!(hud.calls().is_empty());

    advance_time(&mut world, Duration::from_millis(50));
    run_system_once(&mut world, refresh_cooldown_displays);

    assert_eq!(
        hud.calls(),
        vec![
            HudCall::SetParams { player: controller, channel: 1 },
            HudCall::Show { player: controller, channel: 1, text: "Cooldown left: 0.90".into() },
        ]
    );
    assert_eq!(display_status(&world), Some(TaskStatus::Running));
}

#[test]
fn refresh_completes_and_clears_channel_when_cooldown_ends() {
    let hud = RecordingHud::default();
    let (mut world, controller) = world_with_display(Some(hud.clone()));

    advance_time(&mut world, Duration::from_millis(1000));
    run_system_once(&mut world, refresh_cooldown_displays);

    assert_eq!(hud.calls(), vec![HudCall::Remove { player: controller, channel: 1 }]);
    assert_eq!(display_status(&world), Some(TaskStatus::Completed));

    // Finished tasks are dropped on the next pass.
    advance_time(&mut world, Duration::from_millis(100));
    run_system_once(&mut world, refresh_cooldown_displays);
    assert_eq!(display_status(&world), None);
    assert_eq!(hud.calls().len(), 1);
}

#[test]
fn refresh_cancels_for_disconnected_player() {
    let hud = RecordingHud::default();
    let (mut world, controller) = world_with_display(Some(hud.clone()));

    world.get_mut::<PlayerController>(controller).unwrap().connection = ConnectionState::Disconnected;

    advance_time(&mut world, Duration::from_millis(100));
    run_system_once(&mut world, refresh_cooldown_displays);

    assert!(hud.calls().is_empty());
    assert_eq!(display_status(&world), Some(TaskStatus::Canceled));
}

#[test]
fn refresh_cancels_for_despawned_player() {
    let hud = RecordingHud::default();
    let (mut world, controller) = world_with_display(Some(hud.clone()));

    world.despawn(controller);

    advance_time(&mut world, Duration::from_millis(100));
    run_system_once(&mut world, refresh_cooldown_displays);

    assert!(hud.calls().is_empty());
    assert_eq!(display_status(&world), Some(TaskStatus::Canceled));
}

#[test]
fn refresh_without_overlay_cancels_display() {
    let (mut world, _) = world_with_display(None);

    advance_time(&mut world, Duration::from_millis(100));
    run_system_once(&mut world, refresh_cooldown_displays);

    assert_eq!(display_status(&world), Some(TaskStatus::Canceled));
}
