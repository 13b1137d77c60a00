//! Headless game simulation.
//!
//! Owns the hecs ECS world, decides when asteroids spawn and with what
//! parameters, and produces GameStateSnapshots for the host shell.

pub mod engine;
pub mod random;
pub mod spawn_params;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use impact_core as core;
pub use random::{RandomSource, ScriptedRandom};
pub use world_setup::SpawnSink;
