//! Session config files.

use std::fs;
use std::path::Path;

use thiserror::Error;

use impact_core::config::{ConfigError, GameConfig};

/// Errors surfaced by the host shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start game loop thread: {0}")]
    Thread(std::io::Error),
    #[error("{0}")]
    Usage(String),
}

/// Load and validate a JSON config. Missing fields fall back to the defaults.
pub fn load(path: impl AsRef<Path>) -> Result<GameConfig, AppError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse(&text)?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse and validate a JSON config string.
pub fn parse(text: &str) -> Result<GameConfig, AppError> {
    let config: GameConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}
