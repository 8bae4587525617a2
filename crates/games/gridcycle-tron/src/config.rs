use std::path::Path;

use serde::{Deserialize, Serialize};

use gridcycle_core::grid::Board;

use crate::arena;

/// Data-driven configuration for the light cycle game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TronConfig {
    /// Board width in units.
    pub board_width: i32,
    /// Board height in units.
    pub board_height: i32,
    /// Side length of one grid cell in units.
    pub cell_size: i32,
    /// Base simulation rate (ticks per second).
    pub tick_rate: f32,
    /// Tick rate while a speed boost is active.
    pub boost_tick_rate: f32,
    /// How many ticks a speed boost lasts.
    pub boost_ticks: u32,
    /// Obstacles take a random step every this many ticks (versus-AI only).
    pub obstacle_step_interval: u32,
    /// Number of rounds per session.
    pub round_count: u8,
    /// Pause between rounds (seconds).
    pub between_round_secs: f32,
}

impl Default for TronConfig {
    fn default() -> Self {
        Self {
            board_width: 800,
            board_height: 600,
            cell_size: 20,
            tick_rate: 10.0,
            boost_tick_rate: 15.0,
            boost_ticks: 30,
            obstacle_step_interval: 20,
            round_count: 1,
            between_round_secs: 2.0,
        }
    }
}

/// Why a config could not be used.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Parse(e) => write!(f, "malformed config: {e}"),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GRIDCYCLE_TRON_CONFIG";
/// Config file looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/tron.toml";

impl TronConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            match Self::from_path(&path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(path = %path, error = %e, "Ignoring config from {CONFIG_ENV_VAR}"),
            }
        }
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            match Self::from_path(DEFAULT_CONFIG_PATH) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = DEFAULT_CONFIG_PATH, error = %e, "Ignoring config file")
                },
            }
        }
        Self::default()
    }

    /// Read and validate a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.board_width % self.cell_size != 0 || self.board_height % self.cell_size != 0 {
            return Err(ConfigError::Invalid(format!(
                "board {}x{} is not a multiple of cell_size {}",
                self.board_width, self.board_height, self.cell_size
            )));
        }
        let board = self.board();
        if board.cols() < 3 || board.rows() < 3 {
            return Err(ConfigError::Invalid(
                "board must be at least 3x3 cells".into(),
            ));
        }
        if !arena::spawns_fit(&board) {
            return Err(ConfigError::Invalid(format!(
                "board {}x{} cells is too small for the start positions",
                board.cols(),
                board.rows()
            )));
        }
        if !(self.tick_rate > 0.0 && self.boost_tick_rate > 0.0) {
            return Err(ConfigError::Invalid("tick rates must be positive".into()));
        }
        if self.obstacle_step_interval == 0 {
            return Err(ConfigError::Invalid(
                "obstacle_step_interval must be at least 1".into(),
            ));
        }
        if self.round_count == 0 {
            return Err(ConfigError::Invalid("round_count must be at least 1".into()));
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height, self.cell_size)
    }
}
