//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Returns the player holding three in a row, if any.
///
/// Lines are checked in [`LINES`] order and the first complete one decides.
/// Under legal play at most one player can hold a line; on an arbitrary
/// board this scan order is the tie-break.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
            sq.player()
        } else {
            None
        }
    })
}
