//! Bridge between front ends and the engine.

use super::event::UiEvent;
use super::view::GameView;
use crate::config::{ConfigError, GameConfig};
use crate::games::tictactoe::{EngineError, GameEngine, GameState};
use tracing::{debug, instrument};

/// Owns one session's engine and the labels used to present it.
#[derive(Debug, Clone)]
pub struct PresentationAdapter {
    engine: GameEngine,
    config: GameConfig,
}

impl PresentationAdapter {
    /// Creates an adapter with a fresh engine sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    #[instrument(skip_all)]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = GameEngine::new(config.size()?);
        Ok(Self { engine, config })
    }

    /// The engine's current state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// The configuration labels are drawn from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Builds the view of the current state.
    pub fn view(&self) -> GameView {
        GameView::from_state(self.engine.state(), &self.config)
    }

    /// Forwards one event to the engine and returns the new view.
    ///
    /// Rejected moves leave the view unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] for a history click past the
    /// end of the move list.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<GameView, EngineError> {
        debug!("Dispatching event");
        match event {
            UiEvent::CellClicked(index) => {
                self.engine.apply_move(index);
            }
            UiEvent::HistoryClicked(step) => {
                self.engine.jump_to(step)?;
            }
            UiEvent::NewGame => {
                self.engine.reset();
            }
        }
        Ok(self.view())
    }
}
