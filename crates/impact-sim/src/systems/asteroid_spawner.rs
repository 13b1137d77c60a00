//! Asteroid spawning system: counts down the spawn timer and emits asteroids.
//!
//! The countdown is re-derived from the cadence curve right after every spawn,
//! so difficulty follows elapsed game time rather than the number of spawns.

use impact_core::components::SpawnState;
use impact_core::config::{CatchUpPolicy, GameConfig};
use impact_core::constants::MAX_CATCH_UP_SPAWNS;
use impact_core::events::GameEvent;

use crate::random::RandomSource;
use crate::spawn_params;
use crate::world_setup::SpawnSink;

/// Advance the spawn timer by `delta_ms` and spawn any asteroid that is due.
///
/// Under [`CatchUpPolicy::SingleSpawnPerTick`] at most one asteroid spawns per
/// call, however large the delta. [`CatchUpPolicy::CatchUpLoop`] spawns at most
/// [`MAX_CATCH_UP_SPAWNS`] and then restarts the countdown from the current
/// interval. Returns the number of asteroids spawned.
pub fn advance<R, S>(
    state: &mut SpawnState,
    config: &GameConfig,
    rng: &mut R,
    sink: &mut S,
    events: &mut Vec<GameEvent>,
    delta_ms: f64,
) -> u32
where
    R: RandomSource + ?Sized,
    S: SpawnSink + ?Sized,
{
    state.elapsed_time_ms += delta_ms;
    state.ms_until_next_spawn -= delta_ms;

    let mut spawned = 0;
    while state.ms_until_next_spawn <= 0.0 {
        let spec = spawn_params::generate(&config.geometry, &config.asteroids, rng);
        sink.spawn_asteroid(spec);

        let next_interval_ms = config.spawn.interval.interval_at(state.elapsed_time_ms);
        match config.spawn.catch_up {
            CatchUpPolicy::SingleSpawnPerTick => state.ms_until_next_spawn = next_interval_ms,
            CatchUpPolicy::CatchUpLoop => state.ms_until_next_spawn += next_interval_ms,
        }
        state.asteroids_spawned += 1;
        spawned += 1;

        log::debug!(
            "asteroid #{} at ({:.0}, {:.0}) r={} speed={:.4}, next spawn in {:.1} ms",
            state.asteroids_spawned,
            spec.position.0.x,
            spec.position.0.y,
            spec.radius,
            spec.velocity.speed(),
            next_interval_ms,
        );
        events.push(GameEvent::AsteroidSpawned {
            spec,
            elapsed_ms: state.elapsed_time_ms,
            next_interval_ms,
        });

        if config.spawn.catch_up == CatchUpPolicy::SingleSpawnPerTick {
            break;
        }
        if spawned >= MAX_CATCH_UP_SPAWNS {
            if state.ms_until_next_spawn <= 0.0 {
                log::warn!(
                    "dropping {:.0} ms of spawn backlog after {spawned} catch-up spawns",
                    -state.ms_until_next_spawn
                );
                state.ms_until_next_spawn = next_interval_ms;
            }
            break;
        }
    }
    spawned
}

/// Interval the cadence curve gives at the state's current game time.
pub fn current_interval(state: &SpawnState, config: &GameConfig) -> f64 {
    config.spawn.interval.interval_at(state.elapsed_time_ms)
}
