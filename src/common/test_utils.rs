//! Test helpers.
//!
//! `World::run_system_once` (via `RunSystemOnce`) runs a single system without a schedule.
//! Systems that use `Commands` only enqueue structural changes, so we flush after running
//! to apply spawns/inserts before assertions.

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::plugins::projectiles::config::BlasterConfig;
use crate::plugins::projectiles::messages::{FireRequest, ProjectileFired, ProjectileHit};
use crate::plugins::projectiles::pool::init_blaster_pools;

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

/// World with the message buffers the projectile systems read and write.
pub fn projectile_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<FireRequest>>();
    world.init_resource::<Messages<ProjectileFired>>();
    world.init_resource::<Messages<ProjectileHit>>();
    world
}

/// Spawn a blaster at `pose` and run pool initialization for it.
///
/// `GlobalTransform` is left at identity: no propagation runs in these worlds.
pub fn spawn_blaster(world: &mut World, config: BlasterConfig, pose: Transform) -> Entity {
    let blaster = world.spawn((config, pose)).id();
    run_system_once::<_, Result, _>(world, init_blaster_pools).expect("blaster config should be valid");
    blaster
}
