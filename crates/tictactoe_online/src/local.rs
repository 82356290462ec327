//! Local two-player (hot-seat) mode.

use crate::ui::{UiEvent, View, outcome_message};
use tictactoe_board::{Game, InvalidMove};
use tracing::{debug, info, instrument};

/// Hot-seat game on one board; the mark alternates each click.
#[derive(Debug, Clone, Default)]
pub struct LocalGame {
    game: Game,
}

impl LocalGame {
    /// Starts a fresh game and shows the board.
    #[instrument]
    pub fn start() -> (Self, Vec<UiEvent>) {
        info!("Starting local game");
        (
            Self { game: Game::new() },
            vec![UiEvent::ShowView(View::Game), UiEvent::BoardChanged],
        )
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Places the current mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] with the game unchanged; front-ends ignore
    /// it so the click simply has no effect.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> Result<Vec<UiEvent>, InvalidMove> {
        let mark = self.game.turn();
        let status = self.game.apply_move(index, mark).inspect_err(|err| {
            debug!(index, error = %err, "Click ignored");
        })?;

        let mut events = vec![UiEvent::BoardChanged];
        events.extend(outcome_message(status).map(UiEvent::Notify));
        Ok(events)
    }

    /// Starts over on the same screen.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Vec<UiEvent> {
        self.game.reset();
        vec![UiEvent::BoardChanged]
    }

    /// Leaves the game for the menu.
    #[instrument(skip(self))]
    pub fn back_to_menu(self) -> Vec<UiEvent> {
        vec![UiEvent::ShowView(View::Menu)]
    }
}
