use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::{projectile_world, run_system_once};
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::ProjectileOwner;
use crate::plugins::projectiles::config::BlasterConfig;
use crate::plugins::projectiles::messages::FireRequest;

#[test]
fn spawn_turrets_creates_enemy_blasters() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    run_system_once(&mut world, super::spawn_turrets);

    let owners: Vec<ProjectileOwner> = world
        .query_filtered::<&BlasterConfig, With<super::Turret>>()
        .iter(&world)
        .map(|config| config.owner)
        .collect();
    assert_eq!(owners.len(), super::TURRET_POSITIONS.len());
    assert!(owners.iter().all(|o| *o == ProjectileOwner::Enemy));
}

#[test]
fn cadence_writes_one_request_per_elapsed_period() {
    let mut world = projectile_world();
    world.insert_resource(Time::<()>::default());

    let turret = world
        .spawn((
            super::Turret,
            super::FireCadence(Timer::from_seconds(0.1, TimerMode::Repeating)),
        ))
        .id();

    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(350));
    run_system_once(&mut world, super::request_turret_fire);

    let requests: Vec<FireRequest> = world
        .resource_mut::<Messages<FireRequest>>()
        .drain()
        .collect();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.blaster == turret));
    assert!(requests.iter().all(|r| r.damage == super::TURRET_SHOT_DAMAGE));
}

#[test]
fn spin_rotates_turrets_about_z() {
    let mut world = World::new();
    world.insert_resource(Tunables { turret_spin: 1.0, ..default() });
    world.insert_resource(Time::<()>::default());
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(500));

    let turret = world.spawn((super::Turret, Transform::default())).id();

    run_system_once(&mut world, super::spin_turrets);

    let (axis, angle) = world.get::<Transform>(turret).unwrap().rotation.to_axis_angle();
    assert!((angle - 0.5).abs() < 1e-4);
    assert!((axis - Vec3::Z).length() < 1e-4);
}
