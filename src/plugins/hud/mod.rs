//! Cooldown feedback on the optional HUD overlay.
//!
//! The overlay is a capability the host may or may not provide. It is looked up once
//! at startup; without it every throw still works, there is just no countdown text.
//!
//! Each player owns at most one [`CooldownDisplay`]. It snapshots the throw time,
//! refreshes the text on a short repeating timer and finishes itself once the
//! cooldown is over or the player is gone.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::config::KnivesConfig;
use crate::common::state::KnivesState;
use crate::plugins::players::components::PlayerController;
use crate::plugins::players::state::ThrowStates;

/// Placement and style of a HUD text channel.
#[derive(Clone, Debug, PartialEq)]
pub struct HudParams {
    pub offset: Vec3,
    pub color: Color,
    pub size: u32,
    pub font: &'static str,
    pub world_units_per_pixel: f32,
}

impl HudParams {
    pub fn cooldown() -> Self {
        const SIZE: u32 = 54;
        Self {
            offset: Vec3::new(-2.3, -3.8, 7.0),
            color: Color::srgb(0.0, 1.0, 1.0),
            size: SIZE,
            font: "Verdana",
            world_units_per_pixel: SIZE as f32 / 7000.0,
        }
    }
}

/// How long one `show` stays up. Longer than the refresh so the text never flickers.
pub const COOLDOWN_TEXT_DURATION: f32 = 0.2;

pub trait HudOverlay: Send + Sync + 'static {
    fn set_params(&mut self, player: Entity, channel: u8, params: &HudParams);
    fn show(&mut self, player: Entity, channel: u8, text: &str, duration: f32);
    fn remove(&mut self, player: Entity, channel: u8);
}

/// Inserted by the host when it ships a HUD overlay.
#[derive(Resource)]
pub struct GameHud(pub Box<dyn HudOverlay>);

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HudCapability {
    Available,
    #[default]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Running,
    Canceled,
    Completed,
}

#[derive(Debug)]
pub struct CooldownDisplay {
    pub target: Entity,
    pub started_at: Duration,
    refresh: Timer,
    status: TaskStatus,
}

impl CooldownDisplay {
    pub fn start(target: Entity, started_at: Duration, refresh: Duration) -> Self {
        Self {
            target,
            started_at,
            refresh: Timer::new(refresh, TimerMode::Repeating),
            status: TaskStatus::Running,
        }
    }

    #[inline]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == TaskStatus::Running
    }

    /// Returns whether the task was still running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        if was_running {
            self.status = TaskStatus::Canceled;
        }
        was_running
    }

    fn complete(&mut self) {
        if self.is_running() {
            self.status = TaskStatus::Completed;
        }
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<HudCapability>()
        .add_systems(PostStartup, negotiate_hud)
        .add_systems(
            Update,
            refresh_cooldown_displays.run_if(in_state(KnivesState::Loaded)),
        );
}

pub fn negotiate_hud(mut commands: Commands, hud: Option<Res<GameHud>>) {
    if hud.is_some() {
        commands.insert_resource(HudCapability::Available);
        return;
    }

    commands.insert_resource(HudCapability::Unavailable);
    warn!("GameHUD overlay is not available. Cooldown HUD will not work.");
}

/// `Some` when both the overlay and a channel are available.
pub fn cooldown_channel(capability: HudCapability, config: &KnivesConfig) -> Option<u8> {
    match capability {
        HudCapability::Available => config.hud_channel(),
        HudCapability::Unavailable => None,
    }
}

pub fn refresh_cooldown_displays(
    time: Res<Time>,
    config: Res<KnivesConfig>,
    capability: Res<HudCapability>,
    mut hud: Option<ResMut<GameHud>>,
    mut states: ResMut<ThrowStates>,
    q_controllers: Query<&PlayerController>,
) {
    let now = time.elapsed();
    let cooldown = config.cooldown();
    let channel = cooldown_channel(*capability, &config);

    for (_, state) in states.iter_mut() {
        let Some(display) = state.cooldown_display.as_mut() else {
            continue;
        };

        if !display.is_running() {
            state.cooldown_display = None;
            continue;
        }

        let (Some(channel), Some(hud)) = (channel, hud.as_deref_mut()) else {
            display.cancel();
            continue;
        };

        display.refresh.tick(time.delta());
        if display.refresh.times_finished_this_tick() == 0 {
            continue;
        }

        let target = display.target;
        let connected = q_controllers.get(target).is_ok_and(PlayerController::is_connected);
        if !connected {
            display.cancel();
            continue;
        }

        let remaining = cooldown.saturating_sub(now.saturating_sub(display.started_at));
        if remaining.is_zero() {
            hud.0.remove(target, channel);
            display.complete();
            continue;
        }

        hud.0.set_params(target, channel, &HudParams::cooldown());
        hud.0.show(
            target,
            channel,
            &format!("Cooldown left: {:.2}", remaining.as_secs_f32()),
            COOLDOWN_TEXT_DURATION,
        );
    }
}

#[cfg(test)]
pub(crate) mod tests;
