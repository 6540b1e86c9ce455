//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `app_headless` installs the full gameplay stack, physics included.
//! - `app_logic` leaves the physics step out and advances time by a fixed step per
//!   update, so cooldowns and lifetimes are deterministic.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

use throwing_knives::common::config::{ConfigSource, KnivesConfig};
use throwing_knives::common::state::KnivesState;
use throwing_knives::plugins;
use throwing_knives::plugins::players::components::*;
use throwing_knives::plugins::players::messages::*;

pub const STEP: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so the physics collider machinery finds its assets.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<Mesh>();

    throwing_knives::game::configure_headless(&mut app);
    app
}

pub fn app_logic(config: KnivesConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));

    // Never pick up a config file from the working directory.
    app.insert_resource(ConfigSource("does/not/exist.toml".into()));
    app.insert_resource(config);

    app.init_state::<KnivesState>();
    plugins::register_logic(&mut app);
    app
}

pub struct Player {
    pub controller: Entity,
    pub pawn: Entity,
    pub weapon: Entity,
}

/// Spawns a connected human holding a karambit, already announced with `PlayerConnected`.
pub fn connect_player(app: &mut App, slot: i32, team: Team, origin: Vec3) -> Player {
    let world = app.world_mut();
    let weapon = world
        .spawn(Weapon { class_name: "weapon_knife_karambit".into(), item_definition: 507 })
        .id();
    let controller = world.spawn(PlayerController::human(slot, team)).id();
    let pawn = world
        .spawn((
            Pawn { controller },
            Transform::from_translation(origin),
            EyeAngles::default(),
            Health { hp: 100 },
            ActiveWeapon(Some(weapon)),
        ))
        .id();
    world.get_mut::<PlayerController>(controller).unwrap().pawn = Some(pawn);
    world.write_message(PlayerConnected { controller });

    Player { controller, pawn, weapon }
}

pub fn press_attack(app: &mut App, controller: Entity) {
    app.world_mut().write_message(PlayerButtonsChanged {
        controller,
        pressed: PlayerButtons::ATTACK,
        released: PlayerButtons::empty(),
    });
    app.update();
}

pub fn tick(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}
