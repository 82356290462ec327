//! Error types for the online client.

use derive_more::Display;
use tictactoe_board::InvalidMove;
use tracing::instrument;

/// Errors raised by the sync adapter, driver, and transports.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SyncError {
    /// The board engine rejected the move.
    #[display("Invalid move: {}", _0)]
    Move(InvalidMove),

    /// Local move attempted while the opponent is to move.
    #[display("Not your turn")]
    NotYourTurn,

    /// No `game-start` has been received yet.
    #[display("No game in progress")]
    NoActiveGame,

    /// No `match-found` has assigned a room yet.
    #[display("Not in a room")]
    NotInRoom,

    /// The connection is gone; the session cannot continue.
    #[display("Session lost")]
    SessionLost,

    /// The transport failed to send or receive.
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// A frame could not be encoded or decoded.
    #[display("Protocol error: {}", _0)]
    Protocol(String),
}

impl std::error::Error for SyncError {}

impl From<InvalidMove> for SyncError {
    fn from(err: InvalidMove) -> Self {
        Self::Move(err)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(err.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for SyncError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
