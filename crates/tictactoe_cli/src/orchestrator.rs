//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use tictactoe_minimax::{
    Action, Board, Outcome, Player as Mark, action_values, apply, current_player, initial_state,
    outcome,
};
use tracing::{debug, info};

/// What happened in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// Final board.
    pub board: Board,
    /// Actions in the order they were played.
    pub moves: Vec<Action>,
    /// `None` if a player quit before the game finished.
    pub outcome: Option<Outcome>,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator<W> {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
    show_values: bool,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator that renders the game to `out`.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            player_x,
            player_o,
            out,
            show_values: false,
        }
    }

    /// Prints the minimax value of every legal move before each turn.
    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    /// Runs one game from the empty board.
    ///
    /// # Errors
    ///
    /// Fails if a player errors, proposes an illegal move, or the output
    /// cannot be written.
    pub fn run(&mut self) -> Result<GameReport> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting game"
        );

        let mut board = initial_state();
        let mut moves = Vec::new();

        while let Some(mark) = current_player(&board) {
            writeln!(self.out, "\n{}\n", board)?;
            if self.show_values {
                self.print_values(&board)?;
            }

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let Some(action) = player.choose(&board)? else {
                info!(player = %player.name(), "Player quit");
                writeln!(self.out, "{} quit.", player.name())?;
                return Ok(GameReport {
                    board,
                    moves,
                    outcome: None,
                });
            };

            board = apply(&board, Some(action))?;
            moves.push(action);
            info!(player = %player.name(), %mark, %action, "Move made");
            writeln!(self.out, "{} ({}) plays {}", player.name(), mark, action.label())?;
        }

        let result = outcome(&board);
        writeln!(self.out, "\n{}\n", board)?;
        if let Some(result) = result {
            info!(%result, plies = moves.len(), "Game over");
            writeln!(self.out, "{}", self.describe(result))?;
        }

        Ok(GameReport {
            board,
            moves,
            outcome: result,
        })
    }

    fn print_values(&mut self, board: &Board) -> Result<()> {
        for (action, value) in action_values(board) {
            writeln!(self.out, "  {:<14} {:+}", action.label(), value)?;
        }
        Ok(())
    }

    fn describe(&self, result: Outcome) -> String {
        match result {
            Outcome::Winner(Mark::X) => format!("{} (X) wins!", self.player_x.name()),
            Outcome::Winner(Mark::O) => format!("{} (O) wins!", self.player_o.name()),
            Outcome::Draw => "Draw.".to_string(),
        }
    }
}
