//! Online session identity.

use crate::protocol::RoomId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictactoe_board::Mark;
use tracing::{info, instrument, warn};

/// State of the connection to the matchmaking server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    /// Matchmaking started, transport not yet confirmed.
    #[default]
    Connecting,
    /// Transport is up.
    Connected,
    /// Torn down; the session accepts nothing more.
    Closed,
}

/// Who we are in the current online game.
///
/// Created when matchmaking starts and closed on disconnect or exit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Session {
    /// Mark assigned by `game-start`; fixed for the session.
    own_mark: Option<Mark>,
    /// Room assigned by `match-found`.
    room: Option<RoomId>,
    /// Opponent identifier from `game-start`.
    opponent_id: Option<String>,
    /// Transport state.
    connection: ConnectionState,
}

impl Session {
    /// Creates a session at matchmaking start.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating online session");
        Self::default()
    }

    /// True once torn down.
    pub fn is_closed(&self) -> bool {
        self.connection == ConnectionState::Closed
    }

    /// Marks the transport as up.
    pub fn mark_connected(&mut self) {
        if !self.is_closed() {
            self.connection = ConnectionState::Connected;
        }
    }

    /// Stores the room from `match-found`.
    #[instrument(skip(self))]
    pub fn join_room(&mut self, room: RoomId) {
        info!(room = %room, "Joined room");
        self.room = Some(room);
    }

    /// Records the mark from `game-start`.
    ///
    /// Returns `false` and leaves the session alone if a different mark
    /// was already assigned.
    #[instrument(skip(self))]
    pub fn assign_mark(&mut self, mark: Mark, opponent_id: String) -> bool {
        match self.own_mark {
            Some(current) if current != mark => {
                warn!(%current, offered = %mark, "Ignoring mark reassignment");
                false
            }
            _ => {
                info!(%mark, opponent_id = %opponent_id, "Mark assigned");
                self.own_mark = Some(mark);
                self.opponent_id = Some(opponent_id);
                true
            }
        }
    }

    /// Tears the session down. Identity is cleared.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        info!("Closing online session");
        *self = Self {
            connection: ConnectionState::Closed,
            ..Self::default()
        };
    }
}
