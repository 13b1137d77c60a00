//! Game state snapshot: the visible state handed to the host after each tick.

use serde::{Deserialize, Serialize};

use crate::components::SessionContext;
use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub session: SessionContext,
    pub spawn: SpawnView,
    pub planet: Option<Position>,
    pub asteroids: Vec<AsteroidView>,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// Spawn timer status for display and diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnView {
    /// Countdown to the next spawn (ms).
    pub ms_until_next_spawn: f64,
    /// Interval the cadence curve gives at the current game time (ms).
    pub current_interval_ms: f64,
    pub asteroids_spawned: u32,
}

/// An asteroid on screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: u32,
    pub linear_drag: f64,
}
