//! Buffered projectile messages.
//!
//! Producers (player input, turret AI) only write `FireRequest`; the fire consumer is the
//! single writer of every `ProjectilePool`. The other two messages are fire-and-forget
//! notifications for systems outside this plugin (audio, damage).

use bevy::prelude::*;

use super::components::{ProjectileEntity, ProjectileOwner};
use super::config::FireCue;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub blaster: Entity,
    /// Payload damage for the fired projectile; 0 leaves it without one.
    pub damage: i32,
}

/// Written on every shot of a blaster that has a fire cue.
#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileFired {
    pub blaster: Entity,
    pub projectile: ProjectileEntity,
    pub owner: ProjectileOwner,
    pub cue: FireCue,
}

/// A flying projectile reached a target of its owner's opponent.
#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileHit {
    pub projectile: ProjectileEntity,
    pub target: Entity,
    pub owner: ProjectileOwner,
    pub damage: i32,
}
