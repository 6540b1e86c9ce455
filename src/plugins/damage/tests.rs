use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, send};
use crate::common::tunables::Tunables;
use crate::plugins::players::components::{Health, Pawn};

use super::*;

fn collision(world: &mut World, a: Entity, b: Entity) {
    send(world, CollisionStart { collider1: a, collider2: b, body1: None, body2: None });
}

fn written(world: &mut World) -> Vec<TakeDamage> {
    run_system_once(world, |mut reader: MessageReader<TakeDamage>| {
        reader.read().copied().collect::<Vec<_>>()
    })
}

fn spawn_pawn(world: &mut World, hp: i32) -> Entity {
    world.spawn((Pawn { controller: Entity::PLACEHOLDER }, Health { hp })).id()
}

#[test]
fn prop_hitting_pawn_emits_crush_damage_either_way_round() {
    let mut world = World::new();
    world.insert_resource(Tunables { impact_damage_per_speed: 0.01, ..default() });
    world.init_resource::<Messages<TakeDamage>>();

    let prop = world.spawn((PhysicsProp, LinearVelocity(Vec3::new(3000.0, 0.0, 0.0)))).id();
    let pawn = spawn_pawn(&mut world, 100);

    collision(&mut world, pawn, prop);
    run_system_once(&mut world, emit_impact_damage);

    let damage = written(&mut world);
    assert_eq!(damage.len(), 1);
    assert_eq!(damage[0].victim, pawn);
    assert_eq!(damage[0].info.inflictor, prop);
    assert_eq!(damage[0].info.attacker, Some(prop));
    assert_eq!(damage[0].info.damage_type, DamageType::Crush);
    assert!((damage[0].info.amount - 30.0).abs() < 1e-3);
}

#[test]
fn collisions_without_prop_or_pawn_are_ignored() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<TakeDamage>>();

    let wall = world.spawn_empty().id();
    let prop = world.spawn(PhysicsProp).id();
    let pawn = spawn_pawn(&mut world, 100);

    collision(&mut world, prop, wall);
    collision(&mut world, pawn, wall);
    run_system_once(&mut world, emit_impact_damage);

    assert!(written(&mut world).is_empty());
}

#[test]
fn apply_subtracts_and_clamps_at_zero() {
    let mut world = World::new();
    let pawn = spawn_pawn(&mut world, 50);
    let other = spawn_pawn(&mut world, 50);

    let info = |amount| DamageInfo {
        inflictor: Entity::PLACEHOLDER,
        attacker: None,
        ability: None,
        damage_type: DamageType::Slash,
        amount,
    };
    send(&mut world, TakeDamage { victim: pawn, info: info(45.0) });
    send(&mut world, TakeDamage { victim: other, info: info(80.0) });
    send(&mut world, TakeDamage { victim: other, info: info(0.0) });

    run_system_once(&mut world, apply_damage);

    assert_eq!(world.get::<Health>(pawn).unwrap().hp, 5);
    assert_eq!(world.get::<Health>(other).unwrap().hp, 0);
}

#[test]
fn applied_amount_is_rounded() {
    assert_eq!(applied_hp(44.6), 45);
    assert_eq!(applied_hp(44.4), 44);
    assert_eq!(applied_hp(0.4), 0);
}
