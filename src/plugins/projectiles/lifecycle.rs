//! Projectile lifecycle: Idle <-> Flying.
//!
//! Every state write goes through `ProjectileBody`, which keeps the derived components
//! (velocity, visibility, collision filters) consistent with `ProjectileState`:
//!
//! | state  | visibility | velocity          | collision filters   |
//! |--------|------------|-------------------|---------------------|
//! | Idle   | Hidden     | zero              | empty               |
//! | Flying | Visible    | heading * speed   | World + owner target|

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Payload, Projectile, ProjectileOwner, ProjectileState};

/// Query data for mutable access to one projectile.
pub type ProjectileBodyData = (
    &'static mut ProjectileState,
    &'static mut Projectile,
    &'static mut Transform,
    &'static mut LinearVelocity,
    &'static mut Visibility,
    &'static mut CollisionLayers,
    &'static mut Payload,
    &'static ProjectileOwner,
);

pub struct ProjectileBody<'a> {
    pub state: Mut<'a, ProjectileState>,
    pub flight: Mut<'a, Projectile>,
    pub transform: Mut<'a, Transform>,
    pub velocity: Mut<'a, LinearVelocity>,
    pub visibility: Mut<'a, Visibility>,
    pub layers: Mut<'a, CollisionLayers>,
    pub payload: Mut<'a, Payload>,
    pub owner: ProjectileOwner,
}

impl<'a>
    From<(
        Mut<'a, ProjectileState>,
        Mut<'a, Projectile>,
        Mut<'a, Transform>,
        Mut<'a, LinearVelocity>,
        Mut<'a, Visibility>,
        Mut<'a, CollisionLayers>,
        Mut<'a, Payload>,
        &'a ProjectileOwner,
    )> for ProjectileBody<'a>
{
    fn from(
        (state, flight, transform, velocity, visibility, layers, payload, owner): (
            Mut<'a, ProjectileState>,
            Mut<'a, Projectile>,
            Mut<'a, Transform>,
            Mut<'a, LinearVelocity>,
            Mut<'a, Visibility>,
            Mut<'a, CollisionLayers>,
            Mut<'a, Payload>,
            &'a ProjectileOwner,
        ),
    ) -> Self {
        Self {
            state,
            flight,
            transform,
            velocity,
            visibility,
            layers,
            payload,
            owner: *owner,
        }
    }
}

impl ProjectileBody<'_> {
    #[inline]
    pub fn is_flying(&self) -> bool {
        *self.state == ProjectileState::Flying
    }

    /// Stop any flight, hide the projectile and clear its payload.
    /// Safe to call on an idle projectile.
    pub fn force_idle(&mut self) {
        *self.state = ProjectileState::Idle;
        self.flight.speed = 0.0;
        self.flight.lifetime.reset();
        self.velocity.0 = Vec2::ZERO;
        *self.visibility = Visibility::Hidden;
        *self.layers = self.owner.idle_layers();
        *self.payload = Payload::default();
    }

    /// Teleport to `pose`. Scale is left untouched.
    pub fn set_pose(&mut self, pose: &Transform) {
        self.transform.translation = pose.translation;
        self.transform.rotation = pose.rotation;
    }

    /// Start flying along the current heading.
    pub fn launch(&mut self, speed: f32) {
        *self.state = ProjectileState::Flying;
        self.flight.speed = speed;
        self.flight.lifetime.reset();
        self.velocity.0 = heading(&self.transform) * speed;
        *self.visibility = Visibility::Visible;
        *self.layers = self.owner.active_layers();
    }
}

/// Local +Y projected onto the play plane. Degenerate orientations fall back to world +Y.
#[inline]
pub fn heading(tf: &Transform) -> Vec2 {
    (tf.rotation * Vec3::Y)
        .truncate()
        .try_normalize()
        .unwrap_or(Vec2::Y)
}
