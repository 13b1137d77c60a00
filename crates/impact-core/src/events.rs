//! Events emitted by the simulation for the host shell.

use serde::{Deserialize, Serialize};

use crate::components::SpawnedObjectSpec;

/// Game events for audio, UI and replay logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A game started.
    SessionStarted { seed: u64 },
    /// An asteroid was handed to the world.
    AsteroidSpawned {
        spec: SpawnedObjectSpec,
        /// Game time of the spawn (ms).
        elapsed_ms: f64,
        /// Countdown chosen for the following spawn (ms).
        next_interval_ms: f64,
    },
    /// The game ended.
    SessionEnded {
        elapsed_ms: f64,
        asteroids_spawned: u32,
    },
}
