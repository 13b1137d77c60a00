//! ECS systems that operate on the game world each tick.
//!
//! Systems are free functions over the world and the session records
//! the engine passes in. They do not own state.

pub mod asteroid_spawner;
pub mod snapshot;
