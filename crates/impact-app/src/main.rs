//! impact-app: headless driver for the asteroid spawner.
//!
//! Usage:
//!   impact-app run --seconds 30 --config ramped.json
//!   impact-app trace --millis 240000 --step 16 --seed 7

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use impact_app::config_file::{self, AppError};
use impact_app::game_loop;
use impact_app::state::{AppState, GameLoopCommand};
use impact_core::commands::PlayerCommand;
use impact_core::config::GameConfig;
use impact_core::constants::TICK_MS;
use impact_core::events::GameEvent;
use impact_sim::SimulationEngine;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "trace" => cmd_trace(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "impact-app: asteroid spawn driver\n\
         \n\
         Commands:\n\
         \n\
         run       Play a session in real time at 60 Hz\n\
         \n\
           --seconds <N>      Wall-clock seconds to run\n\
           --config <path>    JSON session config (optional, default: ramped preset)\n\
           --seed <N>         Override the config seed (optional)\n\
         \n\
         trace     Simulate a session instantly and print spawn events as JSON lines\n\
         \n\
           --millis <N>       Game milliseconds to simulate\n\
           --step <MS>        Frame delta in ms (optional, default: 16.667)\n\
           --config <path>    JSON session config (optional, default: ramped preset)\n\
           --seed <N>         Override the config seed (optional)\n\
         \n\
         Examples:\n\
         \n\
           impact-app run --seconds 30\n\
           RUST_LOG=debug impact-app trace --millis 240000 --seed 7\n"
    );
}

fn parse_flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], name: &str) -> Result<Option<T>, AppError> {
    match parse_flag(args, name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::Usage(format!("{name} expects a number, got {raw:?}"))),
        None => Ok(None),
    }
}

fn require_number<T: std::str::FromStr>(args: &[String], name: &str) -> Result<T, AppError> {
    parse_number(args, name)?.ok_or_else(|| AppError::Usage(format!("{name} is required")))
}

/// Config from `--config` (or the default preset), with `--seed` applied.
fn session_config(args: &[String]) -> Result<GameConfig, AppError> {
    let mut config = match parse_flag(args, "--config") {
        Some(path) => config_file::load(PathBuf::from(path))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = parse_number(args, "--seed")? {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn cmd_run(args: &[String]) -> Result<(), AppError> {
    let seconds: u64 = require_number(args, "--seconds")?;
    let config = session_config(args)?;

    let state = AppState::new();
    let game_loop = game_loop::spawn_game_loop(config, Arc::clone(&state.latest_snapshot))?;
    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = Some(game_loop.commands);
    }

    state.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame));
    for _ in 0..seconds {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snap) = state.snapshot() {
            log::info!(
                "t={:.1}s asteroids={} next spawn in {:.0} ms (interval {:.0} ms)",
                snap.time.elapsed_secs(),
                snap.spawn.asteroids_spawned,
                snap.spawn.ms_until_next_spawn,
                snap.spawn.current_interval_ms
            );
        }
    }

    let summary = state.snapshot().map(|snap| snap.spawn);
    state.send(GameLoopCommand::PlayerCommand(PlayerCommand::EndGame));
    state.send(GameLoopCommand::Shutdown);
    if game_loop.thread.join().is_err() {
        log::error!("game loop thread panicked");
    }

    if let Some(spawn) = summary {
        println!("{}", serde_json::to_string(&spawn)?);
    }
    Ok(())
}

fn cmd_trace(args: &[String]) -> Result<(), AppError> {
    let millis: f64 = require_number(args, "--millis")?;
    let step: f64 = parse_number(args, "--step")?.unwrap_or(TICK_MS);
    if !(step.is_finite() && step > 0.0) {
        return Err(AppError::Usage(format!("--step must be positive, got {step}")));
    }
    let config = session_config(args)?;

    let mut engine = SimulationEngine::new(config)?;
    engine.queue_command(PlayerCommand::StartGame);

    let mut spawned = 0u32;
    while engine.time().elapsed_ms < millis {
        let snapshot = engine.tick(step);
        for event in &snapshot.events {
            if matches!(event, GameEvent::AsteroidSpawned { .. }) {
                println!("{}", serde_json::to_string(event)?);
                spawned += 1;
            }
        }
    }

    log::info!(
        "traced {:.0} ms (seed {}): {spawned} asteroids",
        engine.time().elapsed_ms,
        config.seed
    );
    Ok(())
}
