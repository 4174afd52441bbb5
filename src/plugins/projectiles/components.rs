use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

/// Entity handle that is known to be a pooled projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectileEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    /// Hidden, motionless, collides with nothing.
    #[default]
    Idle,
    Flying,
}

/// Who fired the projectile. Set once at spawn and read by hit attribution.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectileOwner {
    #[default]
    Player,
    Enemy,
}

impl ProjectileOwner {
    #[inline]
    pub fn membership(self) -> Layer {
        match self {
            Self::Player => Layer::PlayerProjectile,
            Self::Enemy => Layer::EnemyProjectile,
        }
    }

    /// Layer whose members take hits from this owner's projectiles.
    #[inline]
    pub fn target(self) -> Layer {
        match self {
            Self::Player => Layer::Enemy,
            Self::Enemy => Layer::Player,
        }
    }

    #[inline]
    pub fn active_layers(self) -> CollisionLayers {
        CollisionLayers::new(self.membership(), [Layer::World, self.target()])
    }

    /// Idle projectiles keep their membership but filter everything out.
    #[inline]
    pub fn idle_layers(self) -> CollisionLayers {
        CollisionLayers::new(self.membership(), [] as [Layer; 0])
    }
}

/// Flight data of a pooled projectile.
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub speed: f32,
    pub lifetime: Timer,
}

impl Projectile {
    pub fn new(lifetime_secs: f32) -> Self {
        Self {
            speed: 0.0,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }
}

/// Game-specific payload set by whoever fired the projectile. Cleared on every recycle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Payload {
    pub damage: i32,
}

/// Links a projectile to the blaster whose pool owns it.
#[derive(Component, Debug)]
#[relationship(relationship_target = PooledProjectiles)]
pub struct PooledBy(pub Entity);

/// All projectiles owned by a blaster. Despawning the blaster despawns them.
#[derive(Component, Debug)]
#[relationship_target(relationship = PooledBy, linked_spawn)]
pub struct PooledProjectiles(Vec<Entity>);

impl PooledProjectiles {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
