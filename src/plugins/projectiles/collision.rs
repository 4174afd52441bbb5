use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{Projectile, ProjectileEntity};
use super::lifecycle::{ProjectileBody, ProjectileBodyData};
use super::messages::ProjectileHit;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// End flights on contact.
///
/// - World: the projectile goes idle.
/// - The owner's target layer: a `ProjectileHit` is written, then the projectile goes idle.
///
/// Idle projectiles filter every layer, so only Flying ones should show up here; the state
/// check also drops repeated contacts of the same projectile within one step.
pub fn process_projectile_collisions(
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a projectile?" check
    q_is_projectile: Query<(), With<Projectile>>,
    mut q_bodies: Query<ProjectileBodyData>,
    // Disjointness proof: projectiles never read layers through this query.
    q_layers: Query<&CollisionLayers, Without<Projectile>>,
    mut hits: MessageWriter<ProjectileHit>,
) {
    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_is_projectile.contains(t1.collider);
        let p2 = q_is_projectile.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile_side, other_side) = if p1 { (t1, t2) } else { (t2, t1) };

        let Ok(other_layers) = q_layers.get(other_side.collider) else {
            continue;
        };

        let Ok(item) = q_bodies.get_mut(projectile_side.collider) else {
            continue;
        };
        let mut body = ProjectileBody::from(item);

        if !body.is_flying() {
            continue;
        }

        if other_layers.memberships.has_all(Layer::World) {
            body.force_idle();
            continue;
        }

        if other_layers.memberships.has_all(body.owner.target()) {
            hits.write(ProjectileHit {
                projectile: ProjectileEntity(projectile_side.collider),
                target: other_side.gameplay_owner(),
                owner: body.owner,
                damage: body.payload.damage,
            });
            body.force_idle();
        }
    }
}
