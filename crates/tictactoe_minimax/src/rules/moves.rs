//! Legal actions and applying them.

use super::{current_player, is_terminal};
use crate::action::Action;
use crate::error::{InvalidActionError, InvalidActionKind};
use crate::types::{Board, Square};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns the empty squares of a board in play.
///
/// A terminal board has no legal actions and yields an empty set. The set
/// iterates in row-major order, which fixes the search tie-break.
#[instrument(level = "trace")]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    if is_terminal(board) {
        return BTreeSet::new();
    }

    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board that results from playing `action`.
///
/// `None` is the "no action" sentinel for a caller that already knows the
/// game is over; the board comes back unchanged. The input board is never
/// modified.
///
/// # Errors
///
/// Returns [`InvalidActionError`] if the action is off the board, lands on
/// an occupied square, or is requested on a terminal board.
#[instrument(level = "trace")]
pub fn apply(board: &Board, action: Option<Action>) -> Result<Board, InvalidActionError> {
    let Some(action) = action else {
        return Ok(*board);
    };

    let Some(index) = action.index() else {
        return Err(InvalidActionError::new(action, InvalidActionKind::OutOfBounds));
    };

    let Some(player) = current_player(board) else {
        return Err(InvalidActionError::new(action, InvalidActionKind::GameOver));
    };

    if !board.is_empty(action) {
        return Err(InvalidActionError::new(action, InvalidActionKind::Occupied));
    }

    trace!(%action, %player, "Placing mark");
    Ok(board.with_square(index, Square::Occupied(player)))
}

/// Iterates over every legal action together with the board it produces,
/// in row-major order.
pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    legal_actions(board)
        .into_iter()
        .filter_map(move |action| apply(board, Some(action)).ok().map(|next| (action, next)))
}
