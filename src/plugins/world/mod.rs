//! World plugin: spawns the arena walls that stop projectiles.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

const HALF_W: f32 = 1024.0;
const HALF_H: f32 = 576.0;
const THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_systems(OnEnter(GameState::InGame), spawn_arena);
}

/// Name, center and size of each wall.
fn walls() -> [(&'static str, Vec2, Vec2); 4] {
    let horizontal = Vec2::new(HALF_W * 2.0 + THICKNESS * 2.0, THICKNESS);
    let vertical = Vec2::new(THICKNESS, HALF_H * 2.0);
    let dx = HALF_W + THICKNESS * 0.5;
    let dy = HALF_H + THICKNESS * 0.5;

    [
        ("WallTop", Vec2::new(0.0, dy), horizontal),
        ("WallBottom", Vec2::new(0.0, -dy), horizontal),
        ("WallLeft", Vec2::new(-dx, 0.0), vertical),
        ("WallRight", Vec2::new(dx, 0.0), vertical),
    ]
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let wall_layers = CollisionLayers::new(
        Layer::World,
        [
            Layer::Player,
            Layer::Enemy,
            Layer::PlayerProjectile,
            Layer::EnemyProjectile,
        ],
    );

    for (name, center, size) in walls() {
        commands.spawn((
            Name::new(name),
            Sprite::from_color(wall_color, size),
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

#[cfg(test)]
mod tests;
