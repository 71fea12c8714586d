//! Game configuration: board size and player display names.

use crate::games::tictactoe::{BoardSize, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Configuration for one game session.
///
/// Loaded from TOML; every field has a default so partial files work.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Display name bound to Player 1.
    #[serde(default = "default_player1_name")]
    #[setters(into)]
    player1_name: String,

    /// Display name bound to Player 2.
    #[serde(default = "default_player2_name")]
    #[setters(into)]
    player2_name: String,
}

#[instrument]
fn default_board_size() -> usize {
    BoardSize::CLASSIC.get()
}

#[instrument]
fn default_player1_name() -> String {
    "Arthur".to_string()
}

#[instrument]
fn default_player2_name() -> String {
    "Flavien".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the board size range and that names are not blank.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.size()?;
        for player in Player::iter() {
            if self.player_name(player).trim().is_empty() {
                return Err(ConfigError::new(format!("{} name must not be empty", player)));
            }
        }
        Ok(())
    }

    /// The board size as an engine type.
    #[instrument(skip(self))]
    pub fn size(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::new(self.board_size)
            .map_err(|e| ConfigError::new(format!("Invalid board_size: {}", e)))
    }

    /// Display name bound to a player role.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player1_name,
            Player::Player2 => &self.player2_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
