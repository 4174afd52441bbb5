mod common;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use blaster::plugins::player::Player;
use blaster::plugins::projectiles::components::{Payload, ProjectileState};
use blaster::plugins::projectiles::messages::{FireRequest, ProjectileFired};
use blaster::plugins::projectiles::pool::ProjectilePool;

fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .expect("player should exist in game")
}

fn player_pool(app: &mut App) -> (usize, usize, Vec<Entity>) {
    let e = player(app);
    let pool = app.world().get::<ProjectilePool>(e).expect("player pool");
    (
        pool.capacity(),
        pool.cursor(),
        pool.slots().iter().map(|s| s.0).collect(),
    )
}

#[test]
fn fire_request_launches_the_next_slot_and_announces_it() {
    let mut app = common::app_in_game();
    let blaster = player(&mut app);
    let (_, cursor_before, slots) = player_pool(&mut app);
    app.world_mut().resource_mut::<Messages<ProjectileFired>>().clear();

    app.world_mut().write_message(FireRequest { blaster, damage: 2 });
    app.update();

    let (_, cursor_after, _) = player_pool(&mut app);
    assert_eq!(cursor_after, cursor_before + 1);

    let fired_slot = slots[cursor_before];
    assert_eq!(
        *app.world().get::<ProjectileState>(fired_slot).unwrap(),
        ProjectileState::Flying
    );
    assert_eq!(app.world().get::<Payload>(fired_slot).unwrap().damage, 2);

    let fired: Vec<ProjectileFired> = app
        .world_mut()
        .resource_mut::<Messages<ProjectileFired>>()
        .drain()
        .filter(|m| m.blaster == blaster)
        .collect();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].projectile.0, fired_slot);
}

#[test]
fn firing_past_capacity_recycles_in_order() {
    let mut app = common::app_in_game();
    let blaster = player(&mut app);
    let (capacity, cursor_before, slots) = player_pool(&mut app);

    for _ in 0..=capacity {
        app.world_mut().write_message(FireRequest { blaster, damage: 0 });
    }
    app.update();

    let (_, cursor_after, _) = player_pool(&mut app);
    assert_eq!(cursor_after, (cursor_before + capacity + 1) % capacity);

    for slot in slots {
        assert_eq!(
            *app.world().get::<ProjectileState>(slot).unwrap(),
            ProjectileState::Flying
        );
    }
}
