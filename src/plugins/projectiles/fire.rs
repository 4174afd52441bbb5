//! Fire: take the next pooled projectile and launch it.
//!
//! # Fail-fast invariants
//! - A pool only contains entities spawned by its prefab, and slots are never despawned
//!   while the pool lives.
//! - Therefore every slot matches the projectile query.
//!
//! If this is violated we `expect()` and crash loudly instead of branching in the hot path.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::{Payload, Projectile, ProjectileEntity};
use super::lifecycle::{ProjectileBody, ProjectileBodyData};
use super::messages::{FireRequest, ProjectileFired};
use super::pool::ProjectilePool;

/// Firing access to every blaster's pool.
///
/// `poses` excludes projectiles, so it never aliases the mutable projectile body query.
/// Launch poses are composed from local `Transform`s up the `ChildOf` chain at fire time,
/// so a fire point moved earlier in the frame fires from where it is now, not from the
/// last propagated `GlobalTransform`.
#[derive(SystemParam)]
pub struct Blasters<'w, 's> {
    pools: Query<'w, 's, &'static mut ProjectilePool>,
    poses: Poses<'w, 's>,
    projectiles: Query<'w, 's, ProjectileBodyData>,
    fired: MessageWriter<'w, ProjectileFired>,
}

impl Blasters<'_, '_> {
    /// Fire one projectile from `blaster`.
    ///
    /// Returns `None` only when `blaster` has no pool yet. The returned projectile is Flying
    /// now, but a later shot from the same blaster may recycle it at any time.
    pub fn fire(&mut self, blaster: Entity) -> Option<ProjectileEntity> {
        let Ok(mut pool) = self.pools.get_mut(blaster) else {
            return None;
        };

        let pose = launch_pose(&self.poses, blaster, pool.launch_point());
        let slot = pool.next_slot();

        let mut body = ProjectileBody::from(
            self.projectiles
                .get_mut(slot.0)
                .expect("ProjectilePool slot is missing projectile components"),
        );

        // Oldest slot wins, even mid-flight.
        body.force_idle();
        body.set_pose(&pose);
        body.launch(pool.launch_speed());

        if let Some(cue) = pool.fire_cue() {
            self.fired.write(ProjectileFired {
                blaster,
                projectile: slot,
                owner: body.owner,
                cue,
            });
        }

        Some(slot)
    }

    /// Attach a payload to a projectile returned by [`Blasters::fire`].
    pub fn set_payload(&mut self, projectile: ProjectileEntity, payload: Payload) {
        let mut body = ProjectileBody::from(
            self.projectiles
                .get_mut(projectile.0)
                .expect("ProjectileEntity is missing projectile components"),
        );
        *body.payload = payload;
    }
}

type Poses<'w, 's> = Query<'w, 's, (&'static Transform, Option<&'static ChildOf>), Without<Projectile>>;

/// Current pose of the launch point, as translation + rotation.
///
/// A despawned launch point falls back to the blaster's own pose.
fn launch_pose(poses: &Poses, blaster: Entity, launch_point: Entity) -> Transform {
    if let Some(global) = world_pose(poses, launch_point) {
        return global.compute_transform();
    }

    debug!("Blaster {blaster}: launch point {launch_point} is gone, firing from the blaster");
    world_pose(poses, blaster)
        .map(|global| global.compute_transform())
        .unwrap_or_default()
}

/// World pose of `entity` from its own and its ancestors' local transforms.
fn world_pose(poses: &Poses, entity: Entity) -> Option<GlobalTransform> {
    let (local, mut parent) = poses.get(entity).ok()?;
    let mut global = GlobalTransform::from(*local);

    while let Some(child_of) = parent {
        let Ok((parent_local, grandparent)) = poses.get(child_of.parent()) else {
            break;
        };
        global = GlobalTransform::from(*parent_local) * global;
        parent = grandparent;
    }

    Some(global)
}

/// Consumer: apply every `FireRequest`.
pub fn fire_requested_blasters(mut reader: MessageReader<FireRequest>, mut blasters: Blasters) {
    for req in reader.read() {
        let Some(projectile) = blasters.fire(req.blaster) else {
            debug!("FireRequest for {} ignored: no projectile pool", req.blaster);
            continue;
        };

        if req.damage != 0 {
            blasters.set_payload(projectile, Payload { damage: req.damage });
        }
    }
}
