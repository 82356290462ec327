//! Online sync adapter.
//!
//! Turns inbound server events into board mutations and local move intents
//! into outbound events. Every entry point returns the [`Effect`]s the
//! caller must carry out, so the whole flow runs without a live transport.

use crate::error::SyncError;
use crate::protocol::{InboundEvent, OutboundEvent};
use crate::session::Session;
use crate::ui::{
    DISCONNECTED_MESSAGE, MATCH_FOUND_MESSAGE, UiEvent, View, WAITING_MESSAGE,
    game_started_message, outcome_message,
};
use tictactoe_board::{Game, Mark, Square};
use tracing::{debug, info, instrument, warn};

/// Work requested by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send an event to the server.
    Send(OutboundEvent),
    /// Close the transport.
    Close,
    /// Reflect a change in the UI.
    Ui(UiEvent),
}

/// Client side of one online game session.
#[derive(Debug, Clone)]
pub struct OnlineClient {
    game: Game,
    session: Session,
}

impl OnlineClient {
    /// Starts matchmaking: a fresh session and the lobby view.
    #[instrument]
    pub fn start_matchmaking() -> (Self, Vec<Effect>) {
        let client = Self {
            game: Game::new(),
            session: Session::new(),
        };
        (client, vec![Effect::Ui(UiEvent::ShowView(View::OnlineLobby))])
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True when the local player may move now.
    ///
    /// X acts on even occupied counts, O on odd ones.
    pub fn is_my_turn(&self) -> bool {
        match self.session.own_mark() {
            Some(mark) => self.game.board().occupied_count() % 2 == mark.parity(),
            None => false,
        }
    }

    /// True when a click on `index` would be accepted.
    pub fn can_play(&self, index: usize) -> bool {
        !self.session.is_closed()
            && self.session.room().is_some()
            && !self.game.status().is_terminal()
            && self.is_my_turn()
            && matches!(self.game.board().cell(index), Some(Square::Empty))
    }

    /// Handles one inbound event.
    ///
    /// Events arriving after the session closed are ignored.
    #[instrument(skip(self, event), fields(event = event.name()))]
    pub fn dispatch(&mut self, event: InboundEvent) -> Vec<Effect> {
        if self.session.is_closed() {
            debug!("Session closed, ignoring event");
            return Vec::new();
        }

        match event {
            InboundEvent::Connect => {
                info!("Connected to server");
                self.session.mark_connected();
                Vec::new()
            }
            InboundEvent::Waiting => {
                info!("Waiting for opponent");
                vec![Effect::Ui(UiEvent::Status(WAITING_MESSAGE.to_string()))]
            }
            InboundEvent::MatchFound { room } => {
                self.session.join_room(room);
                vec![Effect::Ui(UiEvent::Status(MATCH_FOUND_MESSAGE.to_string()))]
            }
            InboundEvent::GameStart { mark, opponent_id } => self.start_game(mark, opponent_id),
            InboundEvent::OpponentMove { index } => self.opponent_move(index),
            InboundEvent::Disconnect => {
                warn!("Server ended the session");
                self.teardown();
                vec![
                    Effect::Ui(UiEvent::Notify(DISCONNECTED_MESSAGE.to_string())),
                    Effect::Close,
                    Effect::Ui(UiEvent::ShowView(View::Menu)),
                ]
            }
        }
    }

    /// Plays a local move at `index`.
    ///
    /// The move is applied optimistically and exactly one `make-move` is
    /// emitted.
    ///
    /// # Errors
    ///
    /// Nothing is sent and the board is unchanged when the session is
    /// closed, no game or room is set, it is not our turn, or the engine
    /// rejects the move.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Vec<Effect>, SyncError> {
        if self.session.is_closed() {
            return Err(SyncError::SessionLost);
        }
        let mark = (*self.session.own_mark()).ok_or(SyncError::NoActiveGame)?;
        let room = self.session.room().clone().ok_or(SyncError::NotInRoom)?;

        if !self.is_my_turn() && !self.game.status().is_terminal() {
            debug!(%mark, "Click ignored, opponent to move");
            return Err(SyncError::NotYourTurn);
        }

        let status = self.game.apply_move(index, mark)?;
        // apply_move only accepts 0-8
        let wire_index = index as u8;
        info!(index, %mark, %status, "Local move played");

        let mut effects = vec![
            Effect::Send(OutboundEvent::new_make_move(room, wire_index)),
            Effect::Ui(UiEvent::BoardChanged),
        ];
        effects.extend(outcome_message(status).map(|m| Effect::Ui(UiEvent::Notify(m))));
        Ok(effects)
    }

    /// Leaves the online game at the user's request.
    #[instrument(skip(self))]
    pub fn exit(&mut self) -> Vec<Effect> {
        if self.session.is_closed() {
            return vec![Effect::Ui(UiEvent::ShowView(View::Menu))];
        }
        self.teardown();
        vec![Effect::Close, Effect::Ui(UiEvent::ShowView(View::Menu))]
    }

    fn start_game(&mut self, mark: Mark, opponent_id: String) -> Vec<Effect> {
        if !self.session.assign_mark(mark, opponent_id) {
            return Vec::new();
        }
        self.game.reset();
        vec![
            Effect::Ui(UiEvent::ShowView(View::Game)),
            Effect::Ui(UiEvent::BoardChanged),
            Effect::Ui(UiEvent::Notify(game_started_message(mark))),
        ]
    }

    fn opponent_move(&mut self, index: i64) -> Vec<Effect> {
        let Some(own) = *self.session.own_mark() else {
            warn!(index, "Opponent move before game start");
            return Vec::new();
        };
        if self.game.status().is_terminal() {
            debug!(index, "Opponent move after game end");
            return Vec::new();
        }
        let Ok(index) = usize::try_from(index) else {
            warn!(index, "Opponent move with negative index");
            return Vec::new();
        };
        match self.game.board().cell(index) {
            None => {
                warn!(index, "Opponent move out of range");
                return Vec::new();
            }
            Some(Square::Occupied(_)) => {
                debug!(index, "Opponent move on occupied square");
                return Vec::new();
            }
            Some(Square::Empty) => {}
        }
        if self.is_my_turn() {
            warn!(index, "Opponent move out of turn, possible desync");
            return Vec::new();
        }

        match self.game.apply_move(index, own.opponent()) {
            Ok(status) => {
                info!(index, %status, "Opponent move applied");
                let mut effects = vec![Effect::Ui(UiEvent::BoardChanged)];
                effects.extend(outcome_message(status).map(|m| Effect::Ui(UiEvent::Notify(m))));
                effects
            }
            Err(err) => {
                warn!(index, error = %err, "Opponent move rejected");
                Vec::new()
            }
        }
    }

    fn teardown(&mut self) {
        self.session.close();
        self.game.reset();
    }
}
