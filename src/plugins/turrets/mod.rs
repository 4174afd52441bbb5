//! Turrets plugin: static enemy blasters that spin and fire on a fixed cadence.
//!
//! Turrets fire faster than their small pools can finish flights, so they keep
//! recycling in-flight projectiles. That is the intended pool behavior, not a leak.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::components::ProjectileOwner;
use crate::plugins::projectiles::config::{BlasterConfig, ProjectilePrefab};
use crate::plugins::projectiles::fire::fire_requested_blasters;
use crate::plugins::projectiles::messages::FireRequest;

const TURRET_POOL_SIZE: usize = 6;
const TURRET_SHOT_SPEED: f32 = 320.0;
const TURRET_SHOT_DAMAGE: i32 = 1;

const TURRET_POSITIONS: [Vec2; 4] = [
    Vec2::new(-600.0, 320.0),
    Vec2::new(600.0, 320.0),
    Vec2::new(-600.0, -320.0),
    Vec2::new(600.0, -320.0),
];

#[derive(Component)]
pub struct Turret;

/// Repeating shot timer.
#[derive(Component, Deref, DerefMut)]
pub struct FireCadence(pub Timer);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_turrets)
        .add_systems(
            Update,
            (spin_turrets, request_turret_fire.before(fire_requested_blasters))
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_turrets(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(
        Layer::Enemy,
        [Layer::World, Layer::Player, Layer::PlayerProjectile],
    );

    for (i, pos) in TURRET_POSITIONS.into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("Turret{i}")),
            Turret,
            FireCadence(Timer::from_seconds(
                tunables.turret_fire_interval,
                TimerMode::Repeating,
            )),
            BlasterConfig {
                capacity: TURRET_POOL_SIZE,
                prefab: Some(ProjectilePrefab {
                    color: Color::srgb(1.0, 0.3, 0.35),
                    radius: 5.0,
                    lifetime_secs: 4.0,
                }),
                speed: TURRET_SHOT_SPEED,
                owner: ProjectileOwner::Enemy,
                ..default()
            },
            Sprite {
                color: Color::srgb(0.85, 0.2, 0.25),
                custom_size: Some(Vec2::splat(30.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(1.0)),
            RigidBody::Static,
            Collider::circle(15.0),
            layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn spin_turrets(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<&mut Transform, With<Turret>>,
) {
    let angle = tunables.turret_spin * time.delta_secs();
    for mut tf in &mut q {
        tf.rotate_z(angle);
    }
}

/// Producer: one FireRequest per elapsed cadence period.
fn request_turret_fire(
    time: Res<Time>,
    mut q: Query<(Entity, &mut FireCadence), With<Turret>>,
    mut writer: MessageWriter<FireRequest>,
) {
    for (turret, mut cadence) in &mut q {
        cadence.tick(time.delta());
        for _ in 0..cadence.times_finished_this_tick() {
            writer.write(FireRequest {
                blaster: turret,
                damage: TURRET_SHOT_DAMAGE,
            });
        }
    }
}

#[cfg(test)]
mod tests;
