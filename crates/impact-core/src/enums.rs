//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Screen edge an asteroid enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Edge for a uniform index in `0..4`. Out-of-range indices wrap.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Overall game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card shown, nothing spawning.
    #[default]
    TitleScreen,
    /// Game running; time advances and asteroids spawn.
    Active,
    /// Game paused; time frozen.
    Paused,
    /// Session ended, world cleared.
    GameOver,
}
