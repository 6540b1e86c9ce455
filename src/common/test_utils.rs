//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes. We call `world.flush()` after
//! running so queued commands are applied before assertions.

use std::time::Duration;

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Drop every buffered message of type `M`.
///
/// `run_system_once` builds a fresh reader each call, so leftovers would be read again.
pub fn clear_messages<M: Message>(world: &mut World) {
    if let Some(mut messages) = world.get_resource_mut::<Messages<M>>() {
        messages.clear();
    }
}

/// Write a message, creating its storage on first use.
pub fn send<M: Message>(world: &mut World, message: M) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
    world.write_message(message);
}

/// Move virtual time forward so `Res<Time>` reports `elapsed + by` and `delta = by`.
pub fn advance_time(world: &mut World, by: Duration) {
    if world.get_resource::<Time>().is_none() {
        world.insert_resource(Time::<()>::default());
    }
    world.resource_mut::<Time>().advance_by(by);
}
