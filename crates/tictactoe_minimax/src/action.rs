//! Board coordinates used as moves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A move: the row and column (each 0-2) of the square to mark.
///
/// Actions order row-major, so a `BTreeSet<Action>` iterates from the
/// top-left square to the bottom-right one. An action only means something
/// relative to a board; one that is legal on one board may be illegal on
/// another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// All nine on-board actions in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action without range checks.
    ///
    /// Out-of-range actions are rejected by [`crate::apply`].
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action if both coordinates are on the board.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        let action = Self::new(row, col);
        action.is_on_board().then_some(action)
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether both coordinates fall inside the 3x3 grid.
    pub fn is_on_board(&self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major square index (0-8), or `None` if off the board.
    pub fn index(&self) -> Option<usize> {
        self.is_on_board().then_some(self.row * 3 + self.col)
    }

    /// Creates an action from a row-major square index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the square.
    pub fn label(&self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
