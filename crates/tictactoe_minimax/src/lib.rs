//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! The crate is a pure, synchronous engine. A caller holds a [`Board`],
//! asks [`best_action`] for a move, applies it with [`apply`] and repeats
//! until [`is_terminal`] reports the game is over.
//!
//! # Architecture
//!
//! - **Board**: `Copy` 3x3 grid of [`Square`]s, the single source of truth.
//! - **Rules**: whose turn it is, legal actions, applying a move, winner
//!   and terminal detection, utility.
//! - **Search**: full-width minimax, X maximizes and O minimizes.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{apply, best_action, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while !is_terminal(&board) {
//!     let action = best_action(&board);
//!     board = apply(&board, action)?;
//! }
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), tictactoe_minimax::InvalidActionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod notation;
mod outcome;
mod rules;
mod search;
mod types;

pub use action::Action;
pub use error::{InvalidActionError, InvalidActionKind};
pub use notation::ParseBoardError;
pub use outcome::{Outcome, outcome};
pub use rules::{
    LINES, apply, current_player, is_full, is_terminal, legal_actions, successors, utility,
    winner,
};
pub use search::{
    SearchStats, action_values, best_action, best_action_with_stats, max_value, min_value,
    optimal_actions,
};
pub use types::{Board, MarkCounts, Player, Square};

/// Returns the starting board: nine empty squares, X to move.
pub fn initial_state() -> Board {
    Board::new()
}
