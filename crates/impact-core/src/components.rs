//! ECS components for hecs entities, plus the per-session records
//! the engine owns directly.
//!
//! Components are plain data structs. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Velocity};

/// Marks an entity as an asteroid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid;

/// Marks an entity as the planet being defended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Planet;

/// Body radius in pixels (visual size and collision shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Radius(pub u32);

/// Velocity decay coefficient applied by the physics step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearDrag(pub f64);

/// Difficulty timer for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnState {
    /// Game time since the session started (ms).
    pub elapsed_time_ms: f64,
    /// Countdown to the next spawn (ms). Dips to zero or below only inside a tick.
    pub ms_until_next_spawn: f64,
    /// Spawns emitted so far this session.
    pub asteroids_spawned: u32,
}

impl SpawnState {
    pub fn new(initial_delay_ms: f64) -> Self {
        Self {
            elapsed_time_ms: 0.0,
            ms_until_next_spawn: initial_delay_ms,
            asteroids_spawned: 0,
        }
    }
}

/// Session-scoped toggles. Lives and dies with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Show diagnostics overlays.
    pub debug: bool,
    pub muted: bool,
    pub music_playing: bool,
    /// True until the first game of this session has started.
    pub first_load: bool,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            debug: false,
            muted: true,
            music_playing: false,
            first_load: true,
        }
    }
}

/// Everything needed to create one asteroid in the world.
/// Produced by the parameter generator and handed straight to a spawn sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnedObjectSpec {
    pub position: Position,
    pub radius: u32,
    pub linear_drag: f64,
    pub velocity: Velocity,
}
