use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;

#[test]
fn spawns_walls_that_stop_projectiles() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_arena);

    let walls: Vec<CollisionLayers> = world
        .query::<(&Name, &RigidBody, &CollisionLayers)>()
        .iter(&world)
        .filter(|(n, rb, _)| n.as_str().starts_with("Wall") && matches!(**rb, RigidBody::Static))
        .map(|(_, _, layers)| *layers)
        .collect();

    assert_eq!(walls.len(), 4);
    for layers in walls {
        assert!(layers.memberships.has_all(Layer::World));
        assert!(layers.filters.has_all(Layer::PlayerProjectile));
        assert!(layers.filters.has_all(Layer::EnemyProjectile));
    }
}
