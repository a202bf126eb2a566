//! Player trait and implementations.

mod human;
mod minimax;

pub use human::{HumanPlayer, parse_action};
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use tictactoe_minimax::{Action, Board};

/// Something that can pick moves.
pub trait Player {
    /// Chooses the next action on a board that is still in play.
    ///
    /// `Ok(None)` means the player gave up and the game should stop.
    fn choose(&mut self, board: &Board) -> Result<Option<Action>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
