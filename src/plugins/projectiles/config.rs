//! Per-blaster configuration.
//!
//! A `BlasterConfig` is everything a blaster needs before its first shot. Adding one to an
//! entity is what turns it into a blaster: `init_blaster_pools` picks it up, validates it and
//! pre-spawns the pool.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Payload, PooledBy, Projectile, ProjectileEntity, ProjectileOwner, ProjectileState};
use super::error::ConfigurationError;

/// Audio cue announced with every shot. Playback belongs to whoever reads `ProjectileFired`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireCue(pub &'static str);

#[derive(Component, Debug, Clone)]
pub struct BlasterConfig {
    pub capacity: usize,
    pub prefab: Option<ProjectilePrefab>,
    /// Launch pose source. `None` fires from the blaster itself.
    pub fire_point: Option<Entity>,
    pub speed: f32,
    pub owner: ProjectileOwner,
    pub fire_cue: Option<FireCue>,
}

impl Default for BlasterConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            prefab: Some(ProjectilePrefab::default()),
            fire_point: None,
            speed: 100.0,
            owner: ProjectileOwner::Player,
            fire_cue: None,
        }
    }
}

impl BlasterConfig {
    /// Checks every precondition of pool initialization.
    pub fn validate(&self) -> Result<&ProjectilePrefab, ConfigurationError> {
        if self.capacity == 0 {
            return Err(ConfigurationError::InvalidCapacity { capacity: self.capacity });
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigurationError::InvalidSpeed { speed: self.speed });
        }
        self.prefab.as_ref().ok_or(ConfigurationError::MissingPrefab)
    }
}

/// Template every pooled projectile is instantiated from.
#[derive(Debug, Clone)]
pub struct ProjectilePrefab {
    pub color: Color,
    pub radius: f32,
    /// Natural flight duration before the projectile goes idle on its own.
    pub lifetime_secs: f32,
}

impl Default for ProjectilePrefab {
    fn default() -> Self {
        Self {
            color: Color::srgb(1.0, 0.85, 0.3),
            radius: 4.0,
            lifetime_secs: 3.0,
        }
    }
}

impl ProjectilePrefab {
    /// Spawn one idle projectile owned by `blaster`.
    ///
    /// Physics components are always present; idle projectiles are hidden, motionless and
    /// filter out every layer, so they never produce collision events.
    pub fn instantiate(
        &self,
        commands: &mut Commands,
        owner: ProjectileOwner,
        blaster: Entity,
    ) -> ProjectileEntity {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                Projectile::new(self.lifetime_secs),
                ProjectileState::Idle,
                owner,
                Payload::default(),
                PooledBy(blaster),
                Sprite {
                    color: self.color,
                    custom_size: Some(Vec2::splat(self.radius * 2.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                (
                    RigidBody::Dynamic,
                    Collider::circle(self.radius),
                    Sensor,
                    owner.idle_layers(),
                    LinearVelocity(Vec2::ZERO),
                    CollisionEventsEnabled,
                ),
            ))
            .id();

        ProjectileEntity(e)
    }
}
