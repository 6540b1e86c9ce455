//! Collision layers.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    ThrownKnife,
}

/// Knives thrown by players must still hit players, including teammates.
#[inline]
pub fn thrown_knife_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::ThrownKnife,
        [Layer::Default, Layer::World, Layer::Player],
    )
}
