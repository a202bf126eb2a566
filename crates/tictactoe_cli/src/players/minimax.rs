//! Engine player backed by exhaustive minimax.

use super::Player;
use anyhow::Result;
use tictactoe_minimax::{Action, Board, best_action_with_stats};
use tracing::debug;

/// Plays the first optimal move in row-major order.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    fn choose(&mut self, board: &Board) -> Result<Option<Action>> {
        let (action, stats) = best_action_with_stats(board);
        debug!(
            player = %self.name,
            action = ?action,
            nodes = stats.nodes,
            "Engine chose move"
        );
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_win() {
        let mut engine = MinimaxPlayer::new("Engine");
        let board: Board = "OXO/.O./X.X".parse().unwrap();
        assert_eq!(engine.choose(&board).unwrap(), Some(Action::new(2, 1)));
        assert_eq!(engine.name(), "Engine");
    }

    #[test]
    fn test_nothing_to_do_on_finished_board() {
        let mut engine = MinimaxPlayer::new("Engine");
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(engine.choose(&board).unwrap(), None);
    }
}
