//! Text format for boards.
//!
//! A board is nine cell characters in row-major order. `X`/`x` and
//! `O`/`o`/`0` are marks; `.`, `_`, `-` and space are empty squares.
//! Row separators (`/`, `|`, newlines) are ignored, so `"XO./.X./..O"` and
//! the three-line [`Display`](std::fmt::Display) output both parse.

use crate::types::{Board, Player, Square};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Fewer than nine cells.
    #[display("board has {} cells, expected 9", got)]
    TooShort {
        /// Cells found.
        got: usize,
    },
    /// More than nine cells.
    #[display("board has more than 9 cells")]
    TooLong,
    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("invalid cell character {:?} at cell {}", character, position)]
    InvalidCell {
        /// The offending character.
        character: char,
        /// Cell index (0-8) where it appeared.
        position: usize,
    },
}

fn parse_square(c: char) -> Option<Square> {
    match c {
        'X' | 'x' => Some(Square::Occupied(Player::X)),
        'O' | 'o' | '0' => Some(Square::Occupied(Player::O)),
        '.' | '_' | '-' | ' ' => Some(Square::Empty),
        _ => None,
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '|' | '\n' | '\r')
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        for c in s.chars().filter(|c| !is_separator(*c)) {
            if count == 9 {
                return Err(ParseBoardError::TooLong);
            }
            squares[count] = parse_square(c).ok_or(ParseBoardError::InvalidCell {
                character: c,
                position: count,
            })?;
            count += 1;
        }

        if count < 9 {
            return Err(ParseBoardError::TooShort { got: count });
        }

        Ok(Board::from_squares(squares))
    }
}
