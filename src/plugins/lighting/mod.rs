//! Lighting plugin (Firefly) (render-only): every pooled projectile carries a small glow.
//!
//! The light lives on the projectile entity itself, so it follows the projectile through
//! every recycle and is hidden with it while idle.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::projectiles::components::{Projectile, ProjectileOwner};

const GLOW_RANGE: f32 = 60.0;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(PostUpdate, attach_projectile_glow);
}

fn glow_color(owner: ProjectileOwner) -> Color {
    match owner {
        ProjectileOwner::Player => Color::srgb(1.0, 0.9, 0.6),
        ProjectileOwner::Enemy => Color::srgb(1.0, 0.35, 0.35),
    }
}

fn attach_projectile_glow(
    mut commands: Commands,
    q: Query<(Entity, &ProjectileOwner), Added<Projectile>>,
) {
    for (e, owner) in &q {
        commands.entity(e).insert(PointLight2d {
            color: glow_color(*owner),
            radius: GLOW_RANGE,
            ..default()
        });
    }
}
