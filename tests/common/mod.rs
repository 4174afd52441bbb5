//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `blaster::game::configure_headless` to install gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Avian needs assets + scenes even without rendering.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    blaster::game::configure_headless(&mut app);
    app
}

/// Boot the app and run one frame so `OnEnter(InGame)` spawns and pools exist.
pub fn app_in_game() -> App {
    let mut app = app_headless();
    app.update();
    // Pools are built by commands during the first Update; flushed by the next frame.
    app.update();
    app
}
