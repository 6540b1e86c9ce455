//! Per-player throw state, owned by one resource and indexed by slot.

use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use crate::plugins::hud::CooldownDisplay;

use super::components::{MAX_PLAYER_SLOTS, PlayerSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ammo {
    Unlimited,
    Remaining(u32),
}

impl Ammo {
    #[inline]
    pub fn per_life(limit: Option<u32>) -> Self {
        limit.map_or(Ammo::Unlimited, Ammo::Remaining)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Ammo::Remaining(0)
    }

    #[inline]
    fn consume(&mut self) {
        if let Ammo::Remaining(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

/// Why a throw did not happen. Never shown to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThrowDenied {
    #[error("player has no pawn")]
    NoPawn,
    #[error("player lacks the required flags")]
    NotPermitted,
    #[error("active weapon is not a knife")]
    NotMelee,
    #[error("no knives left")]
    NoAmmo,
    #[error("cooldown active for another {remaining:?}")]
    CoolingDown { remaining: Duration },
    #[error("no model for item definition {0}")]
    UnknownModel(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowPhase {
    /// Not permitted or out of ammo.
    Idle,
    Armed,
    CoolingDown,
}

#[derive(Debug)]
pub struct PlayerThrowState {
    pub controller: Entity,
    pub has_permission: bool,
    pub ammo: Ammo,
    /// `Time::elapsed()` of the last successful throw.
    pub last_throw: Option<Duration>,
    pub cooldown_display: Option<CooldownDisplay>,
}

impl PlayerThrowState {
    pub fn new(controller: Entity, has_permission: bool, ammo: Ammo) -> Self {
        Self {
            controller,
            has_permission,
            ammo,
            last_throw: None,
            cooldown_display: None,
        }
    }

    pub fn cooldown_remaining(&self, now: Duration, cooldown: Duration) -> Duration {
        self.last_throw
            .map_or(Duration::ZERO, |last| cooldown.saturating_sub(now.saturating_sub(last)))
    }

    /// Ammo under the live per-life limit. `None` turns tracking off; a player who was
    /// untracked when tracking turned on gets the full limit.
    pub fn effective_ammo(&self, limit: Option<u32>) -> Ammo {
        match (limit, self.ammo) {
            (None, _) => Ammo::Unlimited,
            (Some(limit), Ammo::Unlimited) => Ammo::Remaining(limit),
            (Some(_), ammo) => ammo,
        }
    }

    /// Ammo is checked before the cooldown.
    pub fn check_ready(
        &self,
        now: Duration,
        cooldown: Duration,
        limit: Option<u32>,
    ) -> Result<(), ThrowDenied> {
        if self.effective_ammo(limit).is_empty() {
            return Err(ThrowDenied::NoAmmo);
        }

        let remaining = self.cooldown_remaining(now, cooldown);
        if !remaining.is_zero() {
            return Err(ThrowDenied::CoolingDown { remaining });
        }

        Ok(())
    }

    pub fn record_throw(&mut self, now: Duration, limit: Option<u32>) {
        self.ammo = self.effective_ammo(limit);
        self.ammo.consume();
        self.last_throw = Some(now);
    }

    pub fn phase(&self, now: Duration, cooldown: Duration, limit: Option<u32>) -> ThrowPhase {
        if !self.has_permission || self.effective_ammo(limit).is_empty() {
            ThrowPhase::Idle
        } else if self.cooldown_remaining(now, cooldown).is_zero() {
            ThrowPhase::Armed
        } else {
            ThrowPhase::CoolingDown
        }
    }

    /// Cancels the running display, if any, before installing the new one.
    pub fn replace_cooldown_display(&mut self, display: CooldownDisplay) {
        self.cancel_cooldown_display();
        self.cooldown_display = Some(display);
    }

    /// Returns whether a display was still running.
    pub fn cancel_cooldown_display(&mut self) -> bool {
        self.cooldown_display
            .take()
            .is_some_and(|mut display| display.cancel())
    }

    /// Round boundary: full ammo, no cooldown, no display.
    pub fn reset_for_round(&mut self, ammo: Ammo) {
        self.cancel_cooldown_display();
        self.ammo = ammo;
        self.last_throw = None;
    }
}

#[derive(Resource, Debug)]
pub struct ThrowStates {
    slots: Vec<Option<PlayerThrowState>>,
}

impl Default for ThrowStates {
    fn default() -> Self {
        Self {
            slots: (0..MAX_PLAYER_SLOTS).map(|_| None).collect(),
        }
    }
}

impl ThrowStates {
    #[inline]
    pub fn get(&self, slot: PlayerSlot) -> Option<&PlayerThrowState> {
        self.slots[slot.index()].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, slot: PlayerSlot) -> Option<&mut PlayerThrowState> {
        self.slots[slot.index()].as_mut()
    }

    /// Replaces any previous state in the slot.
    pub fn insert(&mut self, slot: PlayerSlot, state: PlayerThrowState) {
        if let Some(mut old) = self.slots[slot.index()].replace(state) {
            old.cancel_cooldown_display();
        }
    }

    pub fn remove(&mut self, slot: PlayerSlot) -> Option<PlayerThrowState> {
        let mut state = self.slots[slot.index()].take()?;
        state.cancel_cooldown_display();
        Some(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &PlayerThrowState)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| Some((PlayerSlot(i as u8), s.as_ref()?)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerSlot, &mut PlayerThrowState)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| Some((PlayerSlot(i as u8), s.as_mut()?)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if let Some(mut state) = slot.take() {
                state.cancel_cooldown_display();
            }
        }
    }
}
