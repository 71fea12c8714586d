//! Command-line interface for tictactoe_history.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_history::GameConfig;
use tracing::{debug, instrument};

/// N×N tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game settings
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Apply events headlessly and print the resulting view
    Script {
        /// Game settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Events: a cell index ("4"), a history step ("@2"), or "new"
        #[arg(required = true, allow_hyphen_values = true)]
        events: Vec<String>,
    },
}

/// Settings shared by every command; flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length N
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Display name for Player 1
    #[arg(long)]
    pub player1: Option<String>,

    /// Display name for Player 2
    #[arg(long)]
    pub player2: Option<String>,
}

impl SettingsArgs {
    /// Reads the config file (if any), applies flag overrides, validates.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if let Some(name) = &self.player1 {
            config = config.with_player1_name(name.as_str());
        }
        if let Some(name) = &self.player2 {
            config = config.with_player2_name(name.as_str());
        }
        config.validate().context("Invalid settings")?;
        debug!(?config, "Settings resolved");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_script() {
        let cli = Cli::parse_from([
            "tictactoe_history",
            "script",
            "--size",
            "4",
            "--json",
            "0",
            "@1",
            "new",
        ]);
        match cli.command {
            Command::Script {
                settings,
                json,
                events,
            } => {
                assert_eq!(settings.size, Some(4));
                assert!(json);
                assert_eq!(events, vec!["0", "@1", "new"]);
            }
            Command::Play { .. } => panic!("Expected script command"),
        }
    }

    #[test]
    fn test_parse_play_names() {
        let cli = Cli::parse_from(["tictactoe_history", "play", "--player1", "Léonard"]);
        match cli.command {
            Command::Play { settings } => {
                assert_eq!(settings.player1.as_deref(), Some("Léonard"));
                assert!(settings.config.is_none());
            }
            Command::Script { .. } => panic!("Expected play command"),
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let config = SettingsArgs::default().resolve().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 4\nplayer1_name = \"Léonard\"").unwrap();

        let settings = SettingsArgs {
            config: Some(file.path().to_path_buf()),
            size: Some(5),
            player1: None,
            player2: Some("Zoé".to_string()),
        };
        let config = settings.resolve().unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.player1_name(), "Léonard");
        assert_eq!(config.player2_name(), "Zoé");
    }

    #[test]
    fn test_resolve_rejects_bad_size() {
        let settings = SettingsArgs {
            size: Some(0),
            ..SettingsArgs::default()
        };
        assert!(settings.resolve().is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let settings = SettingsArgs {
            config: Some(PathBuf::from("/nonexistent/tictactoe.toml")),
            ..SettingsArgs::default()
        };
        assert!(settings.resolve().is_err());
    }
}
