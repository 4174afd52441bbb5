//! Fixed-capacity projectile pool with round-robin reuse.
//!
//! The pool never searches for an idle slot. Every shot takes the next slot in cyclic order,
//! and whatever that projectile was doing is cut short. This keeps firing O(1) and
//! allocation-free, at the cost of truncating old flights when the fire rate outpaces
//! `capacity / flight duration`.

use bevy::ecs::error::Result;
use bevy::prelude::*;

use super::components::ProjectileEntity;
use super::config::{BlasterConfig, FireCue};
use super::error::ConfigurationError;

#[derive(Component, Debug)]
pub struct ProjectilePool {
    slots: Vec<ProjectileEntity>,
    /// Always in `0..slots.len()`.
    cursor: usize,
    launch_point: Entity,
    launch_speed: f32,
    fire_cue: Option<FireCue>,
}

impl ProjectilePool {
    pub fn new(
        slots: Vec<ProjectileEntity>,
        launch_point: Entity,
        launch_speed: f32,
    ) -> Result<Self, ConfigurationError> {
        if slots.is_empty() {
            return Err(ConfigurationError::InvalidCapacity { capacity: 0 });
        }

        Ok(Self {
            slots,
            cursor: 0,
            launch_point,
            launch_speed,
            fire_cue: None,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[ProjectileEntity] {
        &self.slots
    }

    #[inline]
    pub fn launch_point(&self) -> Entity {
        self.launch_point
    }

    #[inline]
    pub fn launch_speed(&self) -> f32 {
        self.launch_speed
    }

    #[inline]
    pub fn fire_cue(&self) -> Option<FireCue> {
        self.fire_cue
    }

    /// Hand out the slot under the cursor and advance the cursor, regardless of slot state.
    #[inline]
    pub fn next_slot(&mut self) -> ProjectileEntity {
        let slot = self.slots[self.cursor];
        self.cursor = (self.cursor + 1) % self.slots.len();
        slot
    }
}

/// Validate `config` and pre-spawn its projectiles, all idle.
///
/// Nothing is spawned when the config is invalid.
pub fn spawn_pool(
    commands: &mut Commands,
    blaster: Entity,
    config: &BlasterConfig,
) -> Result<ProjectilePool, ConfigurationError> {
    let prefab = config.validate()?;

    let slots = (0..config.capacity)
        .map(|_| prefab.instantiate(commands, config.owner, blaster))
        .collect();

    let mut pool = ProjectilePool::new(
        slots,
        config.fire_point.unwrap_or(blaster),
        config.speed,
    )?;
    pool.fire_cue = config.fire_cue;
    Ok(pool)
}

/// Build the pool of every newly configured blaster.
///
/// A bad config is a startup bug: the error goes to Bevy's error handler, which panics by
/// default.
pub fn init_blaster_pools(
    mut commands: Commands,
    q: Query<(Entity, &BlasterConfig), (Added<BlasterConfig>, Without<ProjectilePool>)>,
) -> Result {
    for (blaster, config) in &q {
        let pool = spawn_pool(&mut commands, blaster, config)?;
        info!(
            "Blaster {blaster}: pooled {} {:?} projectiles",
            pool.capacity(),
            config.owner
        );
        commands.entity(blaster).insert(pool);
    }
    Ok(())
}
