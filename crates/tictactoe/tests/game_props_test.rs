//! Property tests for the tic-tac-toe state manager.

use proptest::prelude::*;
use tictactoe::{Game, GameStatus, Mark, MoveOutcome, Square};

/// Indices past 8 are included on purpose; they must be ignored.
fn move_sequence() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Squares only ever go from empty to occupied, and never change mark.
    #[test]
    fn occupied_squares_never_change(moves in move_sequence()) {
        let mut game = Game::new();
        for m in moves {
            let before = game.board().clone();
            game.attempt_move(m);
            for (old, new) in before.squares().iter().zip(game.board().squares()) {
                if *old != Square::Empty {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    /// Replaying an occupied index never changes the game.
    #[test]
    fn occupied_index_is_a_no_op(moves in move_sequence(), pick in 0usize..9) {
        let mut game = Game::new();
        for m in moves {
            game.attempt_move(m);
        }
        if game.board().get_index(pick) != Some(Square::Empty) {
            let before = game.clone();
            prop_assert!(!game.attempt_move(pick).is_placed());
            prop_assert_eq!(game, before);
        }
    }

    /// After a terminal status, nothing moves.
    #[test]
    fn terminal_state_is_frozen(moves in move_sequence(), extra in move_sequence()) {
        let mut game = Game::new();
        for m in moves {
            game.attempt_move(m);
        }
        if game.status().is_terminal() {
            let before = game.clone();
            for m in extra {
                prop_assert!(!game.attempt_move(m).is_placed());
            }
            prop_assert_eq!(game, before);
        }
    }

    /// Accepted moves alternate X, O, X, ...
    #[test]
    fn accepted_moves_alternate(moves in move_sequence()) {
        let mut game = Game::new();
        let mut expected = Mark::X;
        for m in moves {
            if let MoveOutcome::Placed { mark, status, .. } = game.attempt_move(m) {
                prop_assert_eq!(mark, expected);
                if status == GameStatus::InProgress {
                    expected = expected.opponent();
                    prop_assert_eq!(game.turn(), expected);
                } else {
                    prop_assert_eq!(game.turn(), mark);
                }
            }
        }
    }

    /// Occupied count equals the number of accepted moves.
    #[test]
    fn occupied_count_matches_accepted_moves(moves in move_sequence()) {
        let mut game = Game::new();
        let accepted = moves
            .into_iter()
            .filter(|m| game.attempt_move(*m).is_placed())
            .count();
        prop_assert_eq!(game.board().occupied(), accepted);
    }

    /// A win always reports a line owned entirely by the winner.
    #[test]
    fn reported_line_belongs_to_winner(moves in move_sequence()) {
        let mut game = Game::new();
        for m in moves {
            game.attempt_move(m);
        }
        if let GameStatus::Won { mark, line } = *game.status() {
            for pos in line.positions() {
                prop_assert_eq!(game.board().get(pos), Square::Occupied(mark));
            }
        }
    }

    /// Reset restores the initial state from anywhere, and is idempotent.
    #[test]
    fn reset_restores_initial_state(moves in move_sequence()) {
        let mut game = Game::new();
        for m in moves {
            game.attempt_move(m);
        }
        game.reset();
        prop_assert_eq!(&game, &Game::new());
        game.reset();
        prop_assert_eq!(game, Game::new());
    }
}
