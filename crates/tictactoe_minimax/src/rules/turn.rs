//! Turn order, inferred from the marks on the board.

use super::is_terminal;
use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the player to move, or `None` if the game is over.
///
/// X moves first, so X is to move whenever X holds no more marks than O.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Option<Player> {
    if is_terminal(board) {
        return None;
    }

    let counts = board.counts();
    if counts.x <= counts.o {
        Some(Player::X)
    } else {
        Some(Player::O)
    }
}
