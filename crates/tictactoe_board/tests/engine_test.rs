//! Tests for the board engine's move, reset, and status rules.

use tictactoe_board::{Board, Game, GameStatus, InvalidMove, Mark, Move, Position, Square};

fn play(moves: &[(usize, Mark)]) -> Game {
    let mut game = Game::new();
    for &(index, mark) in moves {
        game.apply_move(index, mark).expect("Valid move");
    }
    game
}

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.board(), &Board::new());
    assert!(game.history().is_empty());
}

#[test]
fn test_reset_after_finished_game() {
    let mut game = play(&[
        (0, Mark::X),
        (3, Mark::O),
        (1, Mark::X),
        (4, Mark::O),
        (2, Mark::X),
    ]);
    assert!(game.status().is_terminal());

    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Mark::X);
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert!(game.history().is_empty());
}

#[test]
fn test_top_row_win() {
    let game = play(&[
        (0, Mark::X),
        (3, Mark::O),
        (1, Mark::X),
        (4, Mark::O),
        (2, Mark::X),
    ]);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.status().winner(), Some(Mark::X));
}

#[test]
fn test_full_board_draw() {
    let game = play(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (4, Mark::O),
        (3, Mark::X),
        (5, Mark::O),
        (7, Mark::X),
        (6, Mark::O),
        (8, Mark::X),
    ]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "It's a draw!");
}

#[test]
fn test_win_on_last_square_is_not_draw() {
    // X O X / X O O / X X O: the ninth move completes the left column.
    let game = play(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (4, Mark::O),
        (3, Mark::X),
        (5, Mark::O),
        (7, Mark::X),
        (8, Mark::O),
        (6, Mark::X),
    ]);
    assert!(tictactoe_board::rules::is_full(game.board()));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = Game::new();
    game.apply_move(0, Mark::X).unwrap();
    let before = game.clone();

    let result = game.apply_move(0, Mark::O);
    assert_eq!(result, Err(InvalidMove::Occupied(Position::TopLeft)));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(9, Mark::X), Err(InvalidMove::OutOfRange(9)));
    assert_eq!(game, Game::new());
}

#[test]
fn test_move_after_game_over_rejected() {
    let mut game = play(&[
        (0, Mark::X),
        (3, Mark::O),
        (1, Mark::X),
        (4, Mark::O),
        (2, Mark::X),
    ]);
    let before = game.clone();
    assert_eq!(game.apply_move(8, Mark::O), Err(InvalidMove::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_wrong_turn_rejected() {
    let mut game = Game::new();
    assert_eq!(
        game.apply_move(4, Mark::O),
        Err(InvalidMove::WrongTurn(Mark::O))
    );
    assert_eq!(game, Game::new());
}

#[test]
fn test_turn_alternates() {
    let mut game = Game::new();
    game.apply_move(4, Mark::X).unwrap();
    assert_eq!(game.turn(), Mark::O);
    game.apply_move(0, Mark::O).unwrap();
    assert_eq!(game.turn(), Mark::X);
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut game = Game::new();
    game.apply_move(4, Mark::X).unwrap();
    game.evaluate();
    game.evaluate();
    assert_eq!(game.turn(), Mark::O);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Mark::X, Position::Center),
        Move::new(Mark::O, Position::TopLeft),
        Move::new(Mark::X, Position::BottomRight),
    ];
    let game = Game::replay(&moves).expect("Valid replay");
    assert_eq!(game.history(), moves.as_slice());
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn test_replay_rejects_illegal_sequence() {
    let moves = vec![
        Move::new(Mark::X, Position::Center),
        Move::new(Mark::X, Position::TopLeft),
    ];
    assert_eq!(
        Game::replay(&moves),
        Err(InvalidMove::WrongTurn(Mark::X))
    );
}

#[test]
fn test_board_display() {
    let game = play(&[(0, Mark::X), (4, Mark::O)]);
    assert_eq!(game.board().display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_mark_serializes_as_letter() {
    assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "\"X\"");
    assert_eq!(serde_json::from_str::<Mark>("\"O\"").unwrap(), Mark::O);
}
