//! Messages the host writes into the subsystem.

use bevy::prelude::*;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PlayerButtons: u64 {
        const ATTACK = 1 << 0;
        const JUMP = 1 << 1;
        const DUCK = 1 << 2;
        const FORWARD = 1 << 3;
        const BACK = 1 << 4;
        const USE = 1 << 5;
        const MOVE_LEFT = 1 << 9;
        const MOVE_RIGHT = 1 << 10;
        const ATTACK2 = 1 << 11;
        const RELOAD = 1 << 13;
        const SPEED = 1 << 17;
        const SCORE = 1 << 33;
        const INSPECT = 1 << 35;
    }
}

/// The client finished connecting and has a controller.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlayerConnected {
    pub controller: Entity,
}

/// Carries the raw slot since the controller may already be gone.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlayerDisconnected {
    pub controller: Entity,
    pub slot: i32,
}

#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RoundStarted;

#[derive(Message, Clone, Copy, Debug)]
pub struct PlayerButtonsChanged {
    pub controller: Entity,
    pub pressed: PlayerButtons,
    pub released: PlayerButtons,
}
