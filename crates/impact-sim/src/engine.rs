//! Simulation engine: one game session.
//!
//! `SimulationEngine` owns the hecs ECS world, the session toggles and the
//! spawn timer, processes player commands and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use impact_core::commands::PlayerCommand;
use impact_core::components::{SessionContext, SpawnState};
use impact_core::config::{ConfigError, GameConfig};
use impact_core::enums::GamePhase;
use impact_core::events::GameEvent;
use impact_core::state::GameStateSnapshot;
use impact_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
///
/// Nothing despawns asteroids during a game, so the world and every snapshot
/// grow with the spawn count until `EndGame` clears them. A physics layer that
/// removes asteroids on impact or exit keeps both bounded.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    session: SessionContext,
    spawn_state: SpawnState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine on the title screen. Fails if the config is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            session: SessionContext::default(),
            spawn_state: SpawnState::new(config.spawn.initial_delay_ms),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by `delta_ms` milliseconds and return the resulting snapshot.
    ///
    /// Time only moves while the game is active.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let delta_ms = if delta_ms.is_finite() && delta_ms >= 0.0 {
                delta_ms
            } else {
                log::warn!("ignoring invalid frame delta {delta_ms}");
                0.0
            };
            self.time.advance(delta_ms);
            self.run_systems(delta_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            &self.spawn_state,
            &self.config,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current game time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the session toggles.
    pub fn session(&self) -> SessionContext {
        self.session
    }

    /// Get the spawn timer of the current game.
    pub fn spawn_state(&self) -> SpawnState {
        self.spawn_state
    }

    /// Get the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::TitleScreen | GamePhase::GameOver) {
                    self.start_game();
                } else {
                    log::warn!("StartGame ignored during {:?}", self.phase);
                }
            }
            PlayerCommand::EndGame => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    self.end_game();
                }
            }
            PlayerCommand::ReturnToTitle => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::TitleScreen;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ToggleMute => {
                self.session.muted = !self.session.muted;
                self.session.music_playing = !self.session.muted;
            }
            PlayerCommand::ToggleDebug => {
                self.session.debug = !self.session.debug;
            }
        }
    }

    /// Reset the world and timers and reseed the RNG, so every game with the
    /// same config and deltas plays out identically.
    fn start_game(&mut self) {
        world_setup::setup_game(&mut self.world, &self.config.geometry);
        self.spawn_state = SpawnState::new(self.config.spawn.initial_delay_ms);
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.session.first_load = false;
        self.phase = GamePhase::Active;

        log::info!(
            "game started (seed {}, first spawn in {} ms)",
            self.config.seed,
            self.spawn_state.ms_until_next_spawn
        );
        self.events.push(GameEvent::SessionStarted {
            seed: self.config.seed,
        });
    }

    fn end_game(&mut self) {
        log::info!(
            "game over after {:.1} s, {} asteroids spawned",
            self.time.elapsed_secs(),
            self.spawn_state.asteroids_spawned
        );
        self.events.push(GameEvent::SessionEnded {
            elapsed_ms: self.time.elapsed_ms,
            asteroids_spawned: self.spawn_state.asteroids_spawned,
        });
        self.world.clear();
        self.phase = GamePhase::GameOver;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta_ms: f64) {
        systems::asteroid_spawner::advance(
            &mut self.spawn_state,
            &self.config,
            &mut self.rng,
            &mut self.world,
            &mut self.events,
            delta_ms,
        );
    }
}
