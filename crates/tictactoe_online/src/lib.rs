//! Tic-tac-toe client with local and online modes.
//!
//! # Architecture
//!
//! - **Board engine**: [`tictactoe_board`], shared by both modes
//! - **Local**: hot-seat play on one board ([`LocalGame`])
//! - **Online**: [`OnlineClient`] maps server events to board changes and
//!   local clicks to `make-move` events, returning [`Effect`]s
//! - **Transport**: [`Transport`] trait with WebSocket and in-memory
//!   implementations; [`run_session`] is the event loop tying them together
//!
//! # Example
//!
//! ```
//! use tictactoe_board::Mark;
//! use tictactoe_online::{Effect, InboundEvent, OnlineClient, OutboundEvent};
//!
//! let (mut client, _) = OnlineClient::start_matchmaking();
//! client.dispatch(InboundEvent::MatchFound { room: "room-1".into() });
//! client.dispatch(InboundEvent::GameStart {
//!     mark: Mark::X,
//!     opponent_id: "peer".into(),
//! });
//!
//! let effects = client.play(4).unwrap();
//! assert_eq!(
//!     effects[0],
//!     Effect::Send(OutboundEvent::MakeMove { room: "room-1".into(), index: 4 })
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod error;
mod local;
mod protocol;
mod session;
mod sync;
pub mod terminal;
mod transport;
mod ui;

pub use cli::{Cli, Command};
pub use config::{ClientConfig, SERVER_URL_ENV};
pub use driver::{Intent, SessionEnd, run_session};
pub use error::{ConfigError, SyncError};
pub use local::LocalGame;
pub use protocol::{InboundEvent, OutboundEvent, RoomId};
pub use session::{ConnectionState, Session};
pub use sync::{Effect, OnlineClient};
pub use transport::{MemoryServer, MemoryTransport, Transport, WebSocketTransport};
pub use ui::{
    DISCONNECTED_MESSAGE, MATCH_FOUND_MESSAGE, Ui, UiEvent, View, WAITING_MESSAGE,
    game_started_message, outcome_message,
};
