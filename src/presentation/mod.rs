//! Presentation adapter: view model and event forwarding.
//!
//! Front ends never touch the engine directly. They render a [`GameView`]
//! and send [`UiEvent`]s through a [`PresentationAdapter`].

mod adapter;
mod event;
mod view;

pub use adapter::PresentationAdapter;
pub use event::{EventParseError, UiEvent};
pub use view::{CellView, GameView, HistoryEntry, NEW_GAME_LABEL, history_label, status_text};
