//! Terminal detection and scoring.

use super::winner;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true if the game is over: someone won or the board is full.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Zero-sum score from X's point of view: `1` if X won, `-1` if O won,
/// `0` otherwise.
///
/// Only meaningful on terminal boards; a game in progress scores `0`.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
