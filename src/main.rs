//! tictactoe_history - Unified CLI
//!
//! Interactive terminal play, or headless event scripts for automation.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use tictactoe_history::{PresentationAdapter, UiEvent};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings } => run_play(settings),
        Command::Script {
            settings,
            json,
            events,
        } => run_script(settings, json, events),
    }
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_play(settings: SettingsArgs) -> Result<()> {
    let log_file = std::fs::File::create("tictactoe_history_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = settings.resolve()?;
    tui::run_tui(config)
}

/// Apply scripted events and print the final view.
fn run_script(settings: SettingsArgs, json: bool, events: Vec<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = settings.resolve()?;
    let events = parse_events(&events)?;
    let output = play_script(PresentationAdapter::new(config)?, &events, json)?;
    println!("{output}");
    Ok(())
}

fn parse_events(tokens: &[String]) -> Result<Vec<UiEvent>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<UiEvent>()
                .with_context(|| format!("Invalid event {token:?}"))
        })
        .collect()
}

#[instrument(skip(adapter, events), fields(count = events.len()))]
fn play_script(mut adapter: PresentationAdapter, events: &[UiEvent], json: bool) -> Result<String> {
    info!("Running script");
    let mut view = adapter.view();
    for event in events {
        debug!(?event, "Dispatching");
        view = adapter
            .dispatch(*event)
            .with_context(|| format!("Event {event:?} failed"))?;
    }
    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(view.render_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_history::GameConfig;

    fn adapter() -> PresentationAdapter {
        PresentationAdapter::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_script_reports_winner() {
        let events = parse_events(&["0", "4", "1", "5", "2"].map(String::from)).unwrap();
        let text = play_script(adapter(), &events, false).unwrap();
        assert!(text.contains("Gagnant: Arthur"));
        assert!(text.contains("[X]"));
    }

    #[test]
    fn test_script_json_view() {
        let events = parse_events(&["4", "@0"].map(String::from)).unwrap();
        let json = play_script(adapter(), &events, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Joueur suivant: Arthur");
        assert_eq!(value["history"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_script_rejects_bad_token() {
        assert!(parse_events(&["x".to_string()]).is_err());
    }

    #[test]
    fn test_script_rejects_out_of_range_jump() {
        let events = parse_events(&["@3".to_string()]).unwrap();
        assert!(play_script(adapter(), &events, false).is_err());
    }
}
