use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_default_tunables() {
    let mut app = App::new();
    core::plugin(&mut app);

    let tunables = app.world().resource::<Tunables>();
    assert!(tunables.pixels_per_meter > 0.0);
    assert!(tunables.turret_fire_interval > 0.0);
}

#[test]
fn keeps_tunables_inserted_earlier() {
    let mut app = App::new();
    app.insert_resource(Tunables { player_speed: 1.0, ..default() });
    core::plugin(&mut app);

    assert_eq!(app.world().resource::<Tunables>().player_speed, 1.0);
}
