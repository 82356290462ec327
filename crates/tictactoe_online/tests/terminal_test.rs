//! Tests for the terminal front-end.

use tictactoe_board::{Board, Mark, Position, Square};
use tictactoe_online::terminal::{Input, TerminalUi, parse_input, play_online};
use tictactoe_online::{SessionEnd, Ui, UiEvent, View};

#[test]
fn test_parse_cells_are_one_based() {
    assert_eq!(parse_input("1"), Some(Input::Cell(0)));
    assert_eq!(parse_input(" 9 "), Some(Input::Cell(8)));
    assert_eq!(parse_input("0"), None);
    assert_eq!(parse_input("10"), None);
}

#[test]
fn test_parse_commands() {
    assert_eq!(parse_input("q"), Some(Input::Quit));
    assert_eq!(parse_input("QUIT"), Some(Input::Quit));
    assert_eq!(parse_input("r"), Some(Input::Restart));
    assert_eq!(parse_input("hello"), None);
}

#[test]
fn test_renders_board_and_notifications() {
    let mut board = Board::new();
    board.set(Position::Center, Square::Occupied(Mark::X));

    let mut ui = TerminalUi::new(Vec::new());
    ui.handle(&UiEvent::BoardChanged, &board);
    ui.handle(&UiEvent::Notify("X wins!".to_string()), &board);

    let text = String::from_utf8(ui.into_inner()).unwrap();
    assert!(text.contains("4|X|6"));
    assert!(text.contains("*** X wins! ***"));
}

#[tokio::test]
async fn test_unreachable_server_returns_to_menu() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut ui: Vec<UiEvent> = Vec::new();
    let end = play_online(&format!("ws://{addr}/ws"), &mut ui)
        .await
        .expect("Connection failure is reported through the UI");

    assert_eq!(end, SessionEnd::Lost);
    assert_eq!(ui.first(), Some(&UiEvent::ShowView(View::OnlineLobby)));
    assert!(ui.contains(&UiEvent::Notify("Disconnected from server".to_string())));
    assert_eq!(ui.last(), Some(&UiEvent::ShowView(View::Menu)));
}
