//! Subsystem load state.
//!
//! `Loaded` gates every gameplay system. Leaving it tears down all per-player
//! throw state, entering it seeds state for players that are already connected.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum KnivesState {
    #[default]
    Loaded,
    Unloaded,
}
