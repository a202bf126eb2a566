//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character form used by the board text format.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Number of marks each player has on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    /// Squares held by X.
    pub x: usize,
    /// Squares held by O.
    pub o: usize,
}

impl MarkCounts {
    /// Total number of occupied squares.
    pub fn total(&self) -> usize {
        self.x + self.o
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Applying a move produces a new board and never
/// touches the old one, so a `Board` can be copied freely into the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// The engine does not validate boards built this way; use
    /// [`Board::is_reachable`] to check one.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given action, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|idx| self.squares[idx])
    }

    /// Checks if the square at the given action exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the board with `square` written at `index`.
    pub(crate) fn with_square(mut self, index: usize, square: Square) -> Self {
        self.squares[index] = square;
        self
    }

    /// Counts the marks of each player.
    pub fn counts(&self) -> MarkCounts {
        self.squares
            .iter()
            .fold(MarkCounts::default(), |mut counts, square| {
                match square {
                    Square::Occupied(Player::X) => counts.x += 1,
                    Square::Occupied(Player::O) => counts.o += 1,
                    Square::Empty => {}
                }
                counts
            })
    }

    /// Checks whether this board can arise from the empty board under legal play.
    ///
    /// X moves first, so X holds as many marks as O or exactly one more.
    /// A won board must have been won by whoever moved last, and play stops
    /// at the first win, so both players cannot hold a line.
    pub fn is_reachable(&self) -> bool {
        let MarkCounts { x, o } = self.counts();
        if x != o && x != o + 1 {
            return false;
        }

        let holds_line = |player: Player| {
            rules::LINES.iter().any(|line| {
                line.iter()
                    .all(|&action| self.get(action) == Some(Square::Occupied(player)))
            })
        };

        match (holds_line(Player::X), holds_line(Player::O)) {
            (true, true) => false,
            (true, false) => x == o + 1,
            (false, true) => x == o,
            (false, false) => true,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in cells {
                write!(f, "{}", square.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.counts(), MarkCounts { x: 0, o: 0 });
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(Action::new(3, 0)), None);
        assert!(!board.is_empty(Action::new(0, 3)));
        assert_eq!(board.get(Action::new(2, 2)), Some(Square::Empty));
    }

    #[test]
    fn test_with_square_leaves_original() {
        let board = Board::new();
        let next = board.with_square(4, Square::Occupied(Player::X));
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_display_rows() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_reachable_boards() {
        assert!(Board::new().is_reachable());
        let x_won: Board = "XXX/OO./...".parse().unwrap();
        assert!(x_won.is_reachable());
    }

    #[test]
    fn test_unreachable_counts() {
        let too_many_x: Board = "XX./.../...".parse().unwrap();
        assert!(!too_many_x.is_reachable());
        let o_first: Board = "O../.../...".parse().unwrap();
        assert!(!o_first.is_reachable());
    }

    #[test]
    fn test_unreachable_wins() {
        // X completed a line but O moved last.
        let late_win: Board = "XXX/OOO/...".parse().unwrap();
        assert!(!late_win.is_reachable());
        // O holds a line while X is a mark ahead.
        let o_won_early: Board = "OOO/XX./X.X".parse().unwrap();
        assert!(!o_won_early.is_reachable());
    }
}
