//! Entity spawn factories for setting up the game world.
//!
//! The spawner never touches the ECS directly: it hands each
//! [`SpawnedObjectSpec`] to a [`SpawnSink`] and forgets about it.

use hecs::World;

use impact_core::components::*;
use impact_core::types::{Position, ScreenGeometry, Velocity};

/// Receives new asteroids and turns them into in-world objects.
pub trait SpawnSink {
    fn spawn_asteroid(&mut self, spec: SpawnedObjectSpec);
}

/// Spawns the asteroid as an ECS entity. The handle is not kept.
impl SpawnSink for World {
    fn spawn_asteroid(&mut self, spec: SpawnedObjectSpec) {
        self.spawn((
            Asteroid,
            spec.position,
            spec.velocity,
            Radius(spec.radius),
            LinearDrag(spec.linear_drag),
        ));
    }
}

/// Records specs in order.
impl SpawnSink for Vec<SpawnedObjectSpec> {
    fn spawn_asteroid(&mut self, spec: SpawnedObjectSpec) {
        self.push(spec);
    }
}

/// Set up a fresh game world: just the planet at the target point.
pub fn setup_game(world: &mut World, geometry: &ScreenGeometry) {
    world.clear();
    spawn_planet(world, geometry);
}

/// Spawn the planet at the geometry's target point, at rest.
pub fn spawn_planet(world: &mut World, geometry: &ScreenGeometry) -> hecs::Entity {
    world.spawn((
        Planet,
        Position(geometry.target),
        Velocity::default(),
    ))
}
