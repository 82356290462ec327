//! Line-based terminal front-end.
//!
//! Cells are typed as 1-9 to match the numbers printed on the board.

use crate::driver::{Intent, SessionEnd, run_session};
use crate::local::LocalGame;
use crate::sync::{Effect, OnlineClient};
use crate::transport::WebSocketTransport;
use crate::ui::{DISCONNECTED_MESSAGE, Ui, UiEvent, View};
use std::io::Write;
use tictactoe_board::Board;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Type 1-9 to play a cell, r to restart (local), q to leave.";

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Cell index 0-8.
    Cell(usize),
    /// Start the local game over.
    Restart,
    /// Leave the current game.
    Quit,
}

/// Parses one input line; `None` for anything unrecognised.
pub fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Input::Quit),
        "r" | "restart" => Some(Input::Restart),
        other => match other.parse::<usize>() {
            Ok(n @ 1..=9) => Some(Input::Cell(n - 1)),
            _ => None,
        },
    }
}

/// Writes UI events as plain text.
#[derive(Debug)]
pub struct TerminalUi<W: Write> {
    out: W,
}

impl<W: Write> TerminalUi<W> {
    /// Creates a UI writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the UI, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn show(&mut self, events: &[UiEvent], board: &Board) {
        for event in events {
            self.handle(event, board);
        }
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text) {
            warn!(error = %err, "Terminal write failed");
        }
    }
}

impl<W: Write> Ui for TerminalUi<W> {
    fn handle(&mut self, event: &UiEvent, board: &Board) {
        match event {
            UiEvent::ShowView(View::Menu) => self.line("Back at the menu."),
            UiEvent::ShowView(View::OnlineLobby) => self.line("Looking for an opponent..."),
            UiEvent::ShowView(View::Game) => self.line(HELP),
            UiEvent::Status(status) => self.line(status),
            UiEvent::Notify(message) => self.line(&format!("*** {} ***", message)),
            UiEvent::BoardChanged => {
                self.line("");
                self.line(&board.display());
                self.line("");
            }
        }
    }
}

/// Reads stdin on a detached thread so a pending read never holds up exit.
fn spawn_input_reader() -> mpsc::Receiver<Input> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            match parse_input(&line) {
                Some(input) => {
                    if tx.blocking_send(input).is_err() {
                        break;
                    }
                }
                None => eprintln!("{}", HELP),
            }
        }
    });
    rx
}

/// Plays a hot-seat game until the user quits or stdin closes.
#[instrument]
pub async fn run_local() -> anyhow::Result<()> {
    let mut ui = TerminalUi::new(std::io::stdout());
    let (mut game, events) = LocalGame::start();
    ui.show(&events, game.game().board());

    let mut inputs = spawn_input_reader();
    while let Some(input) = inputs.recv().await {
        let events = match input {
            Input::Cell(index) => match game.click(index) {
                Ok(events) => events,
                Err(err) => {
                    debug!(error = %err, "Ignoring click");
                    continue;
                }
            },
            Input::Restart => game.restart(),
            Input::Quit => break,
        };
        ui.show(&events, game.game().board());
    }

    let board = game.game().board().clone();
    ui.show(&game.back_to_menu(), &board);
    Ok(())
}

/// Connects to the server and plays one online session.
#[instrument]
pub async fn run_online(server_url: &str) -> anyhow::Result<SessionEnd> {
    let mut ui = TerminalUi::new(std::io::stdout());
    play_online(server_url, &mut ui).await
}

/// Plays one online session, rendering to `ui`.
///
/// A failed connection is reported like a lost session: a disconnect
/// notice and a return to the menu.
#[instrument(skip(ui))]
pub async fn play_online<U: Ui>(server_url: &str, ui: &mut U) -> anyhow::Result<SessionEnd> {
    let (mut client, effects) = OnlineClient::start_matchmaking();
    for effect in &effects {
        if let Effect::Ui(event) = effect {
            ui.handle(event, client.game().board());
        }
    }

    let mut transport = match WebSocketTransport::connect(server_url).await {
        Ok(transport) => transport,
        Err(err) => {
            warn!(error = %err, "Could not reach server");
            let board = client.game().board();
            ui.handle(&UiEvent::Notify(DISCONNECTED_MESSAGE.to_string()), board);
            ui.handle(&UiEvent::ShowView(View::Menu), board);
            return Ok(SessionEnd::Lost);
        }
    };

    let mut inputs = spawn_input_reader();
    let (intent_tx, mut intents) = mpsc::channel(16);
    tokio::spawn(async move {
        while let Some(input) = inputs.recv().await {
            let intent = match input {
                Input::Cell(index) => Intent::Play(index),
                Input::Quit => Intent::Exit,
                Input::Restart => continue,
            };
            if intent_tx.send(intent).await.is_err() {
                break;
            }
        }
    });

    let end = run_session(&mut transport, &mut client, &mut intents, ui).await?;
    info!(?end, "Online session over");
    Ok(end)
}
