//! UI-facing events.
//!
//! Game logic never draws. It reports what changed as [`UiEvent`]s and a
//! front-end implementing [`Ui`] decides how to show them.

use tictactoe_board::{Board, GameStatus, Mark};

/// Screens the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum View {
    /// Mode selection.
    Menu,
    /// A board, local or online.
    Game,
    /// Matchmaking in progress.
    OnlineLobby,
}

/// Something the front-end should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Switch to a screen.
    ShowView(View),
    /// Non-blocking status line (lobby messages).
    Status(String),
    /// Blocking notification the user must see.
    Notify(String),
    /// The board changed; redraw it.
    BoardChanged,
}

/// Front-end sink for [`UiEvent`]s.
pub trait Ui {
    /// Reflects one event. `board` is the board after the event.
    fn handle(&mut self, event: &UiEvent, board: &Board);
}

/// Collects events in order; handy for tests and headless runs.
impl Ui for Vec<UiEvent> {
    fn handle(&mut self, event: &UiEvent, _board: &Board) {
        self.push(event.clone());
    }
}

/// Notification text for a finished game, `None` while in progress.
pub fn outcome_message(status: GameStatus) -> Option<String> {
    status.is_terminal().then(|| status.to_string())
}

/// Notification text shown when an online game begins.
pub fn game_started_message(mark: Mark) -> String {
    format!("Game started! You are {}", mark)
}

/// Lobby status while queued.
pub const WAITING_MESSAGE: &str = "Waiting for opponent...";

/// Lobby status once paired.
pub const MATCH_FOUND_MESSAGE: &str = "Match found!";

/// Notification shown when the server drops the session.
pub const DISCONNECTED_MESSAGE: &str = "Disconnected from server";
