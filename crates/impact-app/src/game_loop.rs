//! Game loop thread. Runs the simulation engine at 60Hz on real elapsed time.
//!
//! The engine is built on the caller's thread so an invalid config fails
//! before anything is spawned, then moved into the loop. Commands arrive via
//! an `mpsc` channel and every snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use impact_core::config::GameConfig;
use impact_core::constants::{MAX_FRAME_DELTA_MS, TICK_RATE};
use impact_core::state::GameStateSnapshot;
use impact_sim::engine::SimulationEngine;

use crate::config_file::AppError;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// A running game loop thread.
pub struct GameLoop {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub thread: JoinHandle<()>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: GameConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<GameLoop, AppError> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("impact-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Thread)?;

    Ok(GameLoop {
        commands: cmd_tx,
        thread,
    })
}

/// Milliseconds to feed the engine for a frame that took `elapsed`.
///
/// Clamped so a stalled thread (debugger, suspended laptop) cannot hand the
/// spawner one enormous step.
pub fn frame_delta_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).min(MAX_FRAME_DELTA_MS)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::debug!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the real time since the previous frame
        let now = Instant::now();
        let delta_ms = frame_delta_ms(now - last_frame);
        last_frame = now;
        let snapshot = engine.tick(delta_ms);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, drop the missed ticks
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_core::commands::PlayerCommand;
    use impact_core::config::SpawnIntervalPolicy;
    use impact_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_frame_delta_clamped() {
        assert_eq!(frame_delta_ms(Duration::from_millis(16)), 16.0);
        assert_eq!(frame_delta_ms(Duration::ZERO), 0.0);
        assert_eq!(frame_delta_ms(Duration::from_secs(30)), MAX_FRAME_DELTA_MS);
    }

    #[test]
    fn test_invalid_config_fails_before_spawning() {
        let mut config = GameConfig::default();
        config.spawn.interval = SpawnIntervalPolicy::Fixed { interval_ms: -1.0 };
        let latest = Arc::new(Mutex::new(None));
        assert!(matches!(
            spawn_game_loop(config, latest),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let game_loop = spawn_game_loop(GameConfig::default(), Arc::clone(&latest)).unwrap();

        game_loop
            .commands
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut active = false;
        while Instant::now() < deadline && !active {
            std::thread::sleep(Duration::from_millis(20));
            active = latest
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|snap| snap.phase == GamePhase::Active);
        }
        assert!(active, "game loop never reached the active phase");

        game_loop.commands.send(GameLoopCommand::Shutdown).unwrap();
        game_loop.thread.join().unwrap();
    }
}
