//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    /// Seconds between two turret shots.
    pub turret_fire_interval: f32,
    /// Turret spin in radians per second.
    pub turret_spin: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            turret_fire_interval: 0.25,
            turret_spin: 1.2,
        }
    }
}
