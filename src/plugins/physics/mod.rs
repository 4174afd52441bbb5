//! Physics plugin: Avian integrates projectile velocities and reports their contacts.
//!
//! Top-down arena: no gravity, so a launched projectile keeps its launch velocity until
//! its flight ends.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app
        .world()
        .get_resource::<Tunables>()
        .map_or_else(|| Tunables::default().pixels_per_meter, |t| t.pixels_per_meter);

    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm))
        .insert_resource(Gravity(Vec2::ZERO));
}
