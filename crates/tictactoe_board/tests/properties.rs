//! Property tests over random alternating games.

use proptest::prelude::*;
use tictactoe_board::rules::check_winner;
use tictactoe_board::{Game, GameStatus, InvalidMove, Mark};

fn move_orders() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn never_draw_with_completed_line(order in move_orders()) {
        let mut game = Game::new();
        for index in order {
            let mark = game.turn();
            if game.apply_move(index, mark).is_err() {
                break;
            }
            if check_winner(game.board()).is_some() {
                prop_assert_ne!(game.status(), GameStatus::Draw);
            }
        }
        prop_assert!(game.status().is_terminal());
    }

    #[test]
    fn successive_moves_alternate(order in move_orders()) {
        let mut game = Game::new();
        for index in order {
            if game.status().is_terminal() {
                break;
            }
            game.apply_move(index, game.turn()).unwrap();
        }
        let history = game.history();
        prop_assert_eq!(history[0].mark, Mark::X);
        for pair in history.windows(2) {
            prop_assert_ne!(pair[0].mark, pair[1].mark);
        }
    }

    #[test]
    fn rejected_move_leaves_game_unchanged(order in move_orders(), replay_at in 0usize..9) {
        let mut game = Game::new();
        let mut played = Vec::new();
        for index in order {
            if game.status().is_terminal() {
                break;
            }
            game.apply_move(index, game.turn()).unwrap();
            played.push(index);
        }

        let before = game.clone();
        let index = played[replay_at % played.len()];
        let result = game.apply_move(index, game.turn());
        prop_assert!(matches!(result, Err(InvalidMove::Occupied(_)) | Err(InvalidMove::GameOver)));
        prop_assert_eq!(game, before);
    }
}
