//! Projectiles plugin: **fixed pools, round-robin reuse**.
//!
//! # Pool policy
//! A blaster owns `capacity` projectiles, spawned once when its `BlasterConfig` appears and
//! never despawned before the blaster itself. Firing always takes the slot under the cursor
//! and advances the cursor. There is no free-list and no search. If that slot is still
//! flying, its flight is cut short and the projectile is teleported back to the launch point.
//! Firing is O(1), allocation-free and deterministic; the price is truncated flights when the
//! fire rate exceeds `capacity / flight duration`.
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) init_blaster_pools                                                    │
//!│      - reads: Added<BlasterConfig>                                         │
//!│      - spawns: capacity Idle projectiles, inserts ProjectilePool           │
//!│                                                                            │
//!│  (B) Producers: request_player_fire, turret cadence                        │
//!│      - writes: FireRequest message                                         │
//!│                                                                            │
//!│  (C) Consumer: fire_requested_blasters                                     │
//!│      - mutates: ProjectilePool.cursor                                      │
//!│      - force_idle -> set_pose -> launch on the selected slot               │
//!│      - writes: ProjectileFired (audio cue, fire-and-forget)                │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!FixedUpdate / FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (D) expire_projectile_flights: lifetime elapsed -> Idle                   │
//!│                                                                            │
//!│  (E) Physics emits CollisionStart messages (Avian)                         │
//!│                                                                            │
//!│  (F) process_projectile_collisions: World -> Idle,                         │
//!│      owner target -> ProjectileHit + Idle                                  │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Idle projectiles are not handed back anywhere: slots never leave their pool.

pub mod components;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod pool;
pub mod collision;
pub mod expiry;

pub mod messages;
pub mod request;
pub mod fire;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::FireRequest>()
            .add_message::<messages::ProjectileFired>()
            .add_message::<messages::ProjectileHit>();

        // Update-phase pipeline: init -> aim -> request -> fire
        app.add_systems(
            Update,
            (
                pool::init_blaster_pools,
                request::aim_player_at_cursor,
                request::request_player_fire,
                fire::fire_requested_blasters,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            expiry::expire_projectile_flights.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_projectile_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
