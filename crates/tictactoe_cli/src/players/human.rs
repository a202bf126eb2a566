//! Human player reading moves from a line-based input.

use super::Player;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_minimax::{Action, Board, legal_actions};
use tracing::{debug, warn};

/// Parses a move typed by a human.
///
/// Accepts a square number `1`-`9` in row-major order, or a `row col` pair
/// of 0-based coordinates separated by whitespace or a comma.
pub fn parse_action(input: &str) -> Option<Action> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [square] => {
            let square: usize = square.parse().ok()?;
            square.checked_sub(1).and_then(Action::from_index)
        }
        [row, col] => Action::try_new(row.parse().ok()?, col.parse().ok()?),
        _ => None,
    }
}

/// Human player that prompts on a writer and reads answers from a reader.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Option<Action>> {
        let legal = legal_actions(board);

        loop {
            write!(self.output, "{}, your move (1-9 or \"row col\", q to quit): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(None);
            }

            let line = line.trim();
            if matches!(line, "q" | "quit") {
                return Ok(None);
            }

            match parse_action(line) {
                Some(action) if legal.contains(&action) => return Ok(Some(action)),
                Some(action) => {
                    warn!(%action, "Square not available");
                    writeln!(self.output, "{} is not available.", action.label())?;
                }
                None => writeln!(self.output, "Could not read {:?} as a move.", line)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_square_number() {
        assert_eq!(parse_action("1"), Some(Action::new(0, 0)));
        assert_eq!(parse_action(" 5 "), Some(Action::new(1, 1)));
        assert_eq!(parse_action("9"), Some(Action::new(2, 2)));
        assert_eq!(parse_action("0"), None);
        assert_eq!(parse_action("10"), None);
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_action("2 1"), Some(Action::new(2, 1)));
        assert_eq!(parse_action("0,2"), Some(Action::new(0, 2)));
        assert_eq!(parse_action("3 0"), None);
        assert_eq!(parse_action("a b"), None);
        assert_eq!(parse_action(""), None);
    }

    #[test]
    fn test_reprompts_until_legal() {
        let board: Board = "X../.../...".parse().unwrap();
        let input = Cursor::new("foo\n1\n5\n");
        let mut output = Vec::new();
        let mut human = HumanPlayer::new("Alice", input, &mut output);

        assert_eq!(human.choose(&board).unwrap(), Some(Action::new(1, 1)));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Could not read"));
        assert!(printed.contains("Top-left is not available"));
    }

    #[test]
    fn test_quit_and_eof() {
        let board = Board::new();
        let mut human = HumanPlayer::new("Bob", Cursor::new("q\n"), Vec::new());
        assert_eq!(human.choose(&board).unwrap(), None);

        let mut human = HumanPlayer::new("Bob", Cursor::new(""), Vec::new());
        assert_eq!(human.choose(&board).unwrap(), None);
    }
}
