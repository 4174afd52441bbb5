//! Natural end of flight: a projectile that flew for its whole lifetime goes idle.
//!
//! Idle projectiles stay where they stopped until their slot is fired again; nothing is
//! returned to the pool because slots never leave it.

use bevy::prelude::*;

use super::lifecycle::{ProjectileBody, ProjectileBodyData};

pub fn expire_projectile_flights(time: Res<Time<Fixed>>, mut q: Query<ProjectileBodyData>) {
    for item in &mut q {
        let mut body = ProjectileBody::from(item);
        if !body.is_flying() {
            continue;
        }

        body.flight.lifetime.tick(time.delta());
        if body.flight.lifetime.is_finished() {
            body.force_idle();
        }
    }
}
