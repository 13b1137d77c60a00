//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use impact_core::components::*;
use impact_core::config::GameConfig;
use impact_core::enums::GamePhase;
use impact_core::events::GameEvent;
use impact_core::state::*;
use impact_core::types::{Position, SimTime, Velocity};

use super::asteroid_spawner;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &SessionContext,
    spawn_state: &SpawnState,
    config: &GameConfig,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        session: *session,
        spawn: SpawnView {
            ms_until_next_spawn: spawn_state.ms_until_next_spawn,
            current_interval_ms: asteroid_spawner::current_interval(spawn_state, config),
            asteroids_spawned: spawn_state.asteroids_spawned,
        },
        planet: find_planet_position(world),
        asteroids: build_asteroids(world),
        events,
    }
}

fn find_planet_position(world: &World) -> Option<Position> {
    world
        .query::<(&Planet, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// Asteroid views, sorted by entity id.
fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    let mut asteroids: Vec<(u32, AsteroidView)> = world
        .query::<(&Asteroid, &Position, &Velocity, &Radius, &LinearDrag)>()
        .iter()
        .map(|(entity, (_, pos, vel, radius, drag))| {
            (
                entity.id(),
                AsteroidView {
                    position: *pos,
                    velocity: *vel,
                    radius: radius.0,
                    linear_drag: drag.0,
                },
            )
        })
        .collect();

    asteroids.sort_by_key(|(id, _)| *id);
    asteroids.into_iter().map(|(_, view)| view).collect()
}
