use bevy::prelude::*;

/// Highest valid slot is `MAX_PLAYER_SLOTS - 1`.
pub const MAX_PLAYER_SLOTS: usize = 65;

/// A validated player slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerSlot(pub(super) u8);

impl PlayerSlot {
    #[inline]
    pub fn new(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .filter(|&i| i < MAX_PLAYER_SLOTS)
            .map(|i| Self(i as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Team {
    #[default]
    Unassigned,
    Spectator,
    Terrorist,
    CounterTerrorist,
}

impl Team {
    /// Item definition of the stock knife for this team.
    #[inline]
    pub fn default_knife(self) -> u16 {
        match self {
            Team::CounterTerrorist => 42,
            _ => 59,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClientKind {
    #[default]
    Human,
    Bot,
    SourceTv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConnectionState {
    Connecting,
    #[default]
    Connected,
    Disconnected,
}

/// The controller entity the host keeps for every client.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    /// Raw host slot. Not guaranteed to be in range.
    pub slot: i32,
    pub team: Team,
    pub kind: ClientKind,
    pub connection: ConnectionState,
    pub pawn: Option<Entity>,
}

impl PlayerController {
    pub fn human(slot: i32, team: Team) -> Self {
        Self {
            slot,
            team,
            kind: ClientKind::Human,
            connection: ConnectionState::Connected,
            pawn: None,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }

    #[inline]
    pub fn is_connected_human(&self) -> bool {
        self.kind == ClientKind::Human && self.is_connected()
    }
}

/// The in-world body of a player.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pawn {
    pub controller: Entity,
}

/// View angles in degrees. Positive pitch looks down.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct EyeAngles {
    pub pitch: f32,
    pub yaw: f32,
}

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub hp: i32,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActiveWeapon(pub Option<Entity>);

#[derive(Component, Debug, Clone)]
pub struct Weapon {
    pub class_name: String,
    pub item_definition: u16,
}

impl Weapon {
    #[inline]
    pub fn is_melee(&self) -> bool {
        self.class_name.contains("knife") || self.class_name.contains("bayonet")
    }
}
