//! Core types and definitions for the asteroid-intercept game.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, configuration, components, commands, events and snapshots.
//! It has no dependency on the ECS runtime or any host framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
