//! Error raised when a caller applies an illegal action.

use crate::action::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidActionKind {
    /// Row or column is outside 0-2.
    #[display("square is off the board")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// The board is terminal, so no action is legal.
    #[display("game is already over")]
    GameOver,
}

/// An action that is not a member of the board's legal actions.
///
/// This is always a caller error: collaborators should only request actions
/// drawn from [`crate::legal_actions`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action {}: {} at {}:{}", action, kind, file, line)]
pub struct InvalidActionError {
    /// The rejected action.
    pub action: Action,
    /// Why it was rejected.
    pub kind: InvalidActionKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidActionError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(action: Action, kind: InvalidActionKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            action,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_reason() {
        let err = InvalidActionError::new(Action::new(1, 1), InvalidActionKind::Occupied);
        let msg = err.to_string();
        assert!(msg.contains("(1, 1)"));
        assert!(msg.contains("occupied"));
    }

    #[test]
    fn test_tracks_caller_file() {
        let err = InvalidActionError::new(Action::new(0, 4), InvalidActionKind::OutOfBounds);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
