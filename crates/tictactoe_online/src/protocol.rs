//! Wire events exchanged with the matchmaking server.
//!
//! Each frame is one JSON text message of the form
//! `{"event": "<name>", "data": <payload>}`. Payload-less events omit
//! `data` on encode and accept a missing, `null`, or empty-object `data` on
//! decode. Event and field names are fixed by the server and must not change.

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use tictactoe_board::Mark;
use tracing::instrument;

/// Server-assigned room identifier.
pub type RoomId = String;

/// Events received from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum InboundEvent {
    /// Transport opened.
    Connect,
    /// Queued; no opponent yet.
    Waiting,
    /// Paired with an opponent in a room.
    MatchFound {
        /// Room scoping all later moves.
        room: RoomId,
    },
    /// Game begins; mark assignment is final.
    GameStart {
        /// The local player's mark.
        mark: Mark,
        /// Opaque opponent identifier.
        #[serde(rename = "opponentId")]
        opponent_id: String,
    },
    /// Move made by the opponent.
    OpponentMove {
        /// Cell index; anything outside 0-8 is ignored.
        index: i64,
    },
    /// Session terminated.
    Disconnect,
}

impl InboundEvent {
    /// Decodes a JSON text frame.
    #[instrument(level = "trace")]
    pub fn decode(frame: &str) -> Result<Self, SyncError> {
        let mut value: serde_json::Value = serde_json::from_str(frame)?;
        if let Some(fields) = value.as_object_mut() {
            let payloadless = matches!(
                fields.get("event").and_then(serde_json::Value::as_str),
                Some("connect" | "waiting" | "disconnect")
            );
            let empty_data = fields
                .get("data")
                .and_then(serde_json::Value::as_object)
                .is_some_and(serde_json::Map::is_empty);
            if payloadless && empty_data {
                fields.remove("data");
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            InboundEvent::Connect => "connect",
            InboundEvent::Waiting => "waiting",
            InboundEvent::MatchFound { .. } => "match-found",
            InboundEvent::GameStart { .. } => "game-start",
            InboundEvent::OpponentMove { .. } => "opponent-move",
            InboundEvent::Disconnect => "disconnect",
        }
    }
}

/// Events sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum OutboundEvent {
    /// Propose a local move in a room.
    MakeMove {
        /// Room from `match-found`.
        room: RoomId,
        /// Cell index 0-8.
        index: u8,
    },
}

impl OutboundEvent {
    /// Encodes as a JSON text frame.
    #[instrument(level = "trace")]
    pub fn encode(&self) -> Result<String, SyncError> {
        Ok(serde_json::to_string(self)?)
    }
}
