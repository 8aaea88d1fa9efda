//! Application configuration: `config/default.toml` plus environment overrides.
//!
//! The file is optional. Environment variables `SWITCHMAZE__*` override it,
//! with a double underscore for nesting (e.g. `SWITCHMAZE__RUN__MAX_MOVES=500`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_BOARD, DEFAULT_MAX_MOVES, DEFAULT_TICK_MS};

/// Root of the configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub run: RunSection,
}

/// [run] section: which maze, how long, and how to pace the turns.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunSection {
    /// Name of a bundled board
    pub board: String,
    /// Safety ceiling on the number of turns
    pub max_moves: usize,
    /// Pause after every turn until the user advances
    pub step_mode: bool,
    /// Print the trace to the console instead of drawing the dashboard
    pub headless: bool,
    /// Delay between auto-played turns in the dashboard
    pub tick_ms: u64,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            board: DEFAULT_BOARD.to_string(),
            max_moves: DEFAULT_MAX_MOVES,
            step_mode: false,
            headless: false,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Loads the configuration.
///
/// Looks for `config/default.toml` (or `config_path` when given), then applies
/// `SWITCHMAZE__*` environment variables on top.
///
/// # Errors
/// Returns the underlying `config::ConfigError` when a source cannot be parsed.
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    match config_path {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        None => {
            builder = builder.add_source(config::File::with_name("config/default").required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("SWITCHMAZE")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
