//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a new game from the title screen or after game over.
    StartGame,
    /// End the running game.
    EndGame,
    /// Go back to the title screen after game over.
    ReturnToTitle,
    /// Pause the game.
    Pause,
    /// Resume the game.
    Resume,

    // --- Session toggles ---
    /// Toggle sound.
    ToggleMute,
    /// Toggle diagnostics.
    ToggleDebug,
}
