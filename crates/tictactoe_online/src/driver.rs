//! Event loop for one online session.
//!
//! One handler runs at a time: an inbound frame or a local intent is fully
//! processed, effects included, before the next is taken.

use crate::error::SyncError;
use crate::protocol::InboundEvent;
use crate::sync::{Effect, OnlineClient};
use crate::transport::Transport;
use crate::ui::Ui;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Local user intent during an online game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Click on a cell (0-8).
    Play(usize),
    /// Leave the game or cancel matchmaking.
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user left.
    Exited,
    /// The server or the connection went away.
    Lost,
}

/// Runs the session until the user exits or the connection is lost.
///
/// The transport is assumed open on entry, so a `connect` is dispatched
/// first. Pending server frames are handled before local intents. A closed
/// intent channel counts as an exit.
#[instrument(skip_all)]
pub async fn run_session<T, U>(
    transport: &mut T,
    client: &mut OnlineClient,
    intents: &mut mpsc::Receiver<Intent>,
    ui: &mut U,
) -> Result<SessionEnd, SyncError>
where
    T: Transport,
    U: Ui,
{
    let effects = client.dispatch(InboundEvent::Connect);
    if let Some(end) = apply_effects(transport, client, ui, effects, SessionEnd::Lost).await {
        return Ok(end);
    }

    loop {
        let (effects, on_close) = tokio::select! {
            // Server frames first; the server is authoritative
            biased;

            inbound = transport.recv() => {
                let effects = match inbound {
                    Ok(Some(event)) => {
                        debug!(event = event.name(), "Inbound event");
                        client.dispatch(event)
                    }
                    Ok(None) => {
                        info!("Connection ended");
                        client.dispatch(InboundEvent::Disconnect)
                    }
                    Err(SyncError::Protocol(reason)) => {
                        warn!(%reason, "Dropping undecodable frame");
                        continue;
                    }
                    Err(err) => {
                        warn!(error = %err, "Transport failed");
                        client.dispatch(InboundEvent::Disconnect)
                    }
                };
                (effects, SessionEnd::Lost)
            }
            intent = intents.recv() => match intent {
                Some(Intent::Play(index)) => match client.play(index) {
                    Ok(effects) => (effects, SessionEnd::Lost),
                    Err(err) => {
                        debug!(index, error = %err, "Move not played");
                        continue;
                    }
                },
                Some(Intent::Exit) | None => (client.exit(), SessionEnd::Exited),
            },
        };

        if let Some(end) = apply_effects(transport, client, ui, effects, on_close).await {
            info!(?end, "Session finished");
            return Ok(end);
        }
    }
}

/// Carries out effects in order.
///
/// Returns `Some` once the transport has been closed, with `on_close` as
/// the reason, or `Lost` if a send failed.
async fn apply_effects<T, U>(
    transport: &mut T,
    client: &mut OnlineClient,
    ui: &mut U,
    effects: Vec<Effect>,
    on_close: SessionEnd,
) -> Option<SessionEnd>
where
    T: Transport,
    U: Ui,
{
    let mut end = None;

    for effect in effects {
        match effect {
            Effect::Send(event) => {
                if let Err(err) = transport.send(&event).await {
                    warn!(error = %err, "Send failed");
                    for lost in client.dispatch(InboundEvent::Disconnect) {
                        if let Effect::Ui(ui_event) = lost {
                            ui.handle(&ui_event, client.game().board());
                        }
                    }
                    if let Err(err) = transport.close().await {
                        debug!(error = %err, "Close failed");
                    }
                    return Some(SessionEnd::Lost);
                }
            }
            Effect::Close => {
                if let Err(err) = transport.close().await {
                    debug!(error = %err, "Close failed");
                }
                end = Some(on_close);
            }
            Effect::Ui(ui_event) => ui.handle(&ui_event, client.game().board()),
        }
    }
    end
}
