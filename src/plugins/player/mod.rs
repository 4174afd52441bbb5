//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - FixedUpdate: apply velocity to kinematic rigid body
//!
//! The player entity is also a blaster: its `BlasterConfig` fires from a muzzle child placed
//! ahead of the body, so the shot inherits the aim rotation.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::components::ProjectileOwner;
use crate::plugins::projectiles::config::{BlasterConfig, FireCue};

const MUZZLE_OFFSET: f32 = 18.0;
const BLASTER_POOL_SIZE: usize = 16;
const SHOT_SPEED: f32 = 900.0;

#[derive(Component)]
pub struct Player;

/// Fire point of the player's blaster.
#[derive(Component)]
pub struct PlayerMuzzle;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(mut commands: Commands) {
    let layers = CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Enemy, Layer::EnemyProjectile],
    );

    let player = commands
        .spawn((
            Name::new("Player"),
            Player,
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::splat(26.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            RigidBody::Kinematic,
            Collider::circle(13.0),
            layers,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    let muzzle = commands
        .spawn((
            Name::new("PlayerMuzzle"),
            PlayerMuzzle,
            Transform::from_xyz(0.0, MUZZLE_OFFSET, 1.0),
            ChildOf(player),
        ))
        .id();

    commands.entity(player).insert(BlasterConfig {
        capacity: BLASTER_POOL_SIZE,
        fire_point: Some(muzzle),
        speed: SHOT_SPEED,
        owner: ProjectileOwner::Player,
        fire_cue: Some(FireCue("sounds/blaster.ogg")),
        ..default()
    });
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };

    let axis = [
        (KeyCode::KeyW, Vec2::Y),
        (KeyCode::KeyS, Vec2::NEG_Y),
        (KeyCode::KeyA, Vec2::NEG_X),
        (KeyCode::KeyD, Vec2::X),
    ]
    .into_iter()
    .filter(|(key, _)| keys.pressed(*key))
    .map(|(_, dir)| dir)
    .sum::<Vec2>();

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
}
