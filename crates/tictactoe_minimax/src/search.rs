//! Exhaustive minimax search.
//!
//! X maximizes [`utility`] and O minimizes it. The tree is searched to the
//! end with no pruning and no memoization: from any position there are at
//! most 9! move sequences and the recursion is at most nine plies deep.
//! Values are exact, so [`best_action`] is optimal play for either side.
//!
//! Actions are scanned in row-major order. A candidate replaces the current
//! best only if it is strictly better, so among equally good actions the
//! first one in that order wins.

use crate::action::Action;
use crate::rules::{current_player, is_terminal, successors, utility};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Positions evaluated, including the leaves.
    pub nodes: u64,
    /// Terminal positions scored with [`utility`].
    pub terminal: u64,
}

#[derive(Debug, Default)]
struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    fn max_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if is_terminal(board) {
            self.stats.terminal += 1;
            return utility(board);
        }

        let mut value = i32::MIN;
        for (_, child) in successors(board) {
            value = value.max(self.min_value(&child));
        }
        value
    }

    fn min_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if is_terminal(board) {
            self.stats.terminal += 1;
            return utility(board);
        }

        let mut value = i32::MAX;
        for (_, child) in successors(board) {
            value = value.min(self.max_value(&child));
        }
        value
    }

    /// Value of each legal action for the player to move.
    fn action_values(&mut self, board: &Board) -> Vec<(Action, i32)> {
        let Some(player) = current_player(board) else {
            return Vec::new();
        };

        successors(board)
            .map(|(action, child)| {
                let value = match player {
                    Player::X => self.min_value(&child),
                    Player::O => self.max_value(&child),
                };
                (action, value)
            })
            .collect()
    }

    fn best_action(&mut self, board: &Board) -> Option<(Action, i32)> {
        let player = current_player(board)?;
        let mut best: Option<(Action, i32)> = None;

        for (action, value) in self.action_values(board) {
            let improves = match best {
                None => true,
                Some((_, best_value)) => match player {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }

        best
    }
}

/// Minimax value of a position where X is to move.
///
/// Returns [`utility`] on a terminal board.
pub fn max_value(board: &Board) -> i32 {
    Searcher::default().max_value(board)
}

/// Minimax value of a position where O is to move.
///
/// Returns [`utility`] on a terminal board.
pub fn min_value(board: &Board) -> i32 {
    Searcher::default().min_value(board)
}

/// Returns the optimal action for the player to move, or `None` if the
/// game is over.
#[instrument(level = "debug")]
pub fn best_action(board: &Board) -> Option<Action> {
    best_action_with_stats(board).0
}

/// Same choice as [`best_action`], plus the size of the tree it searched.
#[instrument(level = "debug")]
pub fn best_action_with_stats(board: &Board) -> (Option<Action>, SearchStats) {
    let mut searcher = Searcher::default();
    let best = searcher.best_action(board);

    if let Some((action, value)) = best {
        debug!(
            %action,
            value,
            nodes = searcher.stats.nodes,
            terminal = searcher.stats.terminal,
            "Search complete"
        );
    }

    (best.map(|(action, _)| action), searcher.stats)
}

/// Minimax value of every legal action, in row-major order.
///
/// Values are from X's point of view whichever side is to move. A terminal
/// board yields an empty list.
#[instrument(level = "debug")]
pub fn action_values(board: &Board) -> Vec<(Action, i32)> {
    Searcher::default().action_values(board)
}

/// Every action that achieves the optimal value for the player to move,
/// in row-major order.
///
/// The first element is always the action [`best_action`] returns.
#[instrument(level = "debug")]
pub fn optimal_actions(board: &Board) -> Vec<Action> {
    let Some(player) = current_player(board) else {
        return Vec::new();
    };

    let values = action_values(board);
    let target = match player {
        Player::X => values.iter().map(|(_, v)| *v).max(),
        Player::O => values.iter().map(|(_, v)| *v).min(),
    };

    values
        .into_iter()
        .filter(|(_, v)| Some(*v) == target)
        .map(|(action, _)| action)
        .collect()
}
