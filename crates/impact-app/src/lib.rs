//! IMPACT host shell.
//!
//! Wires the simulation engine to a real-time loop thread and loads session
//! configs from disk for the `impact-app` binary.

pub mod config_file;
pub mod game_loop;
pub mod state;

pub use impact_core as core;
