//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a [`Board`](crate::Board). Whose turn it
//! is, which moves are legal and whether the game is over are all derived
//! from the squares alone, so the board stays the single source of truth.

pub mod draw;
pub mod moves;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal, utility};
pub use moves::{apply, legal_actions, successors};
pub use turn::current_player;
pub use win::{LINES, winner};
