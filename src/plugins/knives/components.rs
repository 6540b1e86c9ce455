use std::fmt;

use bevy::prelude::*;

/// Round-independent, never reused identity of a thrown knife.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KnifeId(pub u64);

impl fmt::Display for KnifeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tknife_{}", self.0)
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ThrownKnife {
    pub id: KnifeId,
    /// Pawn that threw it.
    pub owner: Entity,
}

/// Resource path of the model the host should render.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PropModel(pub &'static str);

/// Despawns the entity once the timer finishes.
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn new(duration: std::time::Duration) -> Self {
        Self(Timer::new(duration, TimerMode::Once))
    }
}

/// A short-lived beam drawn behind a flying knife.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
    pub width: f32,
}
