//! Blaster configuration errors.
//!
//! Only pool initialization can fail. Once a pool exists, firing has no error path.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("projectile pool capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: usize },

    #[error("blaster has no projectile prefab")]
    MissingPrefab,

    #[error("projectile speed must be finite and non-negative, got {speed}")]
    InvalidSpeed { speed: f32 },
}
