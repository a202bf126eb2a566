//! Properties of the rules engine over every reachable position.

use std::collections::HashSet;
use tictactoe_minimax::{
    Action, Board, InvalidActionKind, Player, apply, current_player, initial_state, is_terminal,
    legal_actions, outcome, utility, winner,
};

struct GameTreeStats {
    positions: HashSet<Board>,
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

/// Walks every legal game, checking per-ply properties along the way.
fn walk_all_games() -> GameTreeStats {
    fn walk(board: &Board, stats: &mut GameTreeStats) {
        stats.positions.insert(*board);

        let won = winner(board);
        match won {
            Some(Player::X) => assert_eq!(utility(board), 1),
            Some(Player::O) => assert_eq!(utility(board), -1),
            None => assert_eq!(utility(board), 0),
        }

        let actions = legal_actions(board);
        assert_eq!(is_terminal(board), won.is_some() || actions.is_empty());
        assert!(board.is_reachable(), "walked into unreachable board:\n{board}");

        if is_terminal(board) {
            assert_eq!(current_player(board), None);
            stats.games += 1;
            match won {
                Some(Player::X) => stats.x_wins += 1,
                Some(Player::O) => stats.o_wins += 1,
                None => stats.draws += 1,
            }
            return;
        }

        let Some(player) = current_player(board) else {
            panic!("non-terminal board without a player:\n{board}");
        };

        for action in &actions {
            let next = apply(board, Some(*action)).unwrap();
            let remaining = legal_actions(&next);
            if !is_terminal(&next) {
                assert_eq!(remaining.len(), actions.len() - 1);
                assert_eq!(current_player(&next), Some(player.opponent()));
            }
            walk(&next, stats);
        }
    }

    let mut stats = GameTreeStats {
        positions: HashSet::new(),
        games: 0,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };
    walk(&initial_state(), &mut stats);
    stats
}

#[test]
fn test_game_tree_counts() {
    let stats = walk_all_games();
    assert_eq!(stats.games, 255_168);
    assert_eq!(stats.x_wins, 131_184);
    assert_eq!(stats.o_wins, 77_904);
    assert_eq!(stats.draws, 46_080);
    assert_eq!(stats.positions.len(), 5_478);
}

#[test]
fn test_initial_state() {
    let board = initial_state();
    assert_eq!(current_player(&board), Some(Player::X));
    assert_eq!(legal_actions(&board).len(), 9);
    assert_eq!(winner(&board), None);
    assert!(!is_terminal(&board));
}

#[test]
fn test_players_alternate() {
    let mut board = initial_state();
    let mut expected = Player::X;
    for action in [
        Action::new(1, 1),
        Action::new(0, 0),
        Action::new(2, 2),
        Action::new(0, 2),
    ] {
        assert_eq!(current_player(&board), Some(expected));
        board = apply(&board, Some(action)).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(current_player(&board), Some(Player::X));
}

#[test]
fn test_full_board_top_row_x() {
    let board: Board = "XXX/OOO/OOO".parse().unwrap();
    assert_eq!(winner(&board), Some(Player::X));
    assert_eq!(utility(&board), 1);
    assert!(is_terminal(&board));
    assert!(legal_actions(&board).is_empty());
}

#[test]
fn test_read_queries_are_idempotent() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    assert_eq!(winner(&board), winner(&board));
    assert_eq!(is_terminal(&board), is_terminal(&board));
    assert_eq!(legal_actions(&board), legal_actions(&board));
    assert_eq!(outcome(&board), outcome(&board));
}

#[test]
fn test_illegal_apply_leaves_board_untouched() {
    let board: Board = "X../.O./...".parse().unwrap();
    let before = board;

    let occupied = apply(&board, Some(Action::new(1, 1))).unwrap_err();
    assert_eq!(occupied.kind, InvalidActionKind::Occupied);

    let off_board = apply(&board, Some(Action::new(3, 3))).unwrap_err();
    assert_eq!(off_board.kind, InvalidActionKind::OutOfBounds);

    assert_eq!(board, before);
}

#[test]
fn test_apply_after_game_over_fails() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let err = apply(&board, Some(Action::new(2, 0))).unwrap_err();
    assert_eq!(err.kind, InvalidActionKind::GameOver);
    assert!(err.to_string().contains("over"));
    assert_eq!(apply(&board, None).unwrap(), board);
}

#[test]
fn test_board_serializes() {
    let board: Board = "X../.O./...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(board, back);
}
