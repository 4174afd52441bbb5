//! Core plugin: shared resources.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
}

#[cfg(test)]
mod tests;
