//! User interaction events forwarded to the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user interaction the adapter turns into an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiEvent {
    /// A board cell was clicked (row-major index).
    CellClicked(usize),
    /// A move-list entry was clicked.
    HistoryClicked(usize),
    /// The new-game button was clicked.
    NewGame,
}

/// Token that does not name an event.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognized event '{}': use a cell index, @step, or 'new'", _0)]
pub struct EventParseError(pub String);

impl std::error::Error for EventParseError {}

impl FromStr for UiEvent {
    type Err = EventParseError;

    /// Parses `"4"` (click cell 4), `"@2"` (jump to step 2) or `"new"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("new") {
            return Ok(UiEvent::NewGame);
        }
        if let Some(step) = token.strip_prefix('@') {
            return step
                .parse()
                .map(UiEvent::HistoryClicked)
                .map_err(|_| EventParseError(s.to_string()));
        }
        token
            .parse()
            .map(UiEvent::CellClicked)
            .map_err(|_| EventParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("4".parse(), Ok(UiEvent::CellClicked(4)));
        assert_eq!("@0".parse(), Ok(UiEvent::HistoryClicked(0)));
        assert_eq!(" NEW ".parse(), Ok(UiEvent::NewGame));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("x".parse::<UiEvent>().is_err());
        assert!("@".parse::<UiEvent>().is_err());
        assert!("-1".parse::<UiEvent>().is_err());
    }
}
