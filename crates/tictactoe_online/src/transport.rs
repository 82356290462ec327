//! Bidirectional connection to the matchmaking server.

use crate::error::SyncError;
use crate::protocol::{InboundEvent, OutboundEvent};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, instrument, trace, warn};

/// A serialized, in-order event channel to the server.
///
/// `recv` yields `Ok(None)` once the connection has ended. Implementations
/// must be cancel-safe in `recv`, since the driver races it against local
/// input.
#[async_trait::async_trait]
pub trait Transport: Send {
    /// Sends one event.
    async fn send(&mut self, event: &OutboundEvent) -> Result<(), SyncError>;

    /// Waits for the next event.
    ///
    /// Returns `Err(SyncError::Protocol)` for a frame that does not decode;
    /// the connection stays usable after that.
    async fn recv(&mut self) -> Result<Option<InboundEvent>, SyncError>;

    /// Closes the connection. Closing twice is a no-op.
    async fn close(&mut self) -> Result<(), SyncError>;
}

/// WebSocket transport carrying JSON text frames.
pub struct WebSocketTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    closed: bool,
}

impl WebSocketTransport {
    /// Connects to `url` (`ws://` or `wss://`).
    #[instrument]
    pub async fn connect(url: &str) -> Result<Self, SyncError> {
        info!("Connecting to matchmaking server");
        let (stream, response) = tokio_tungstenite::connect_async(url).await?;
        debug!(status = %response.status(), "WebSocket handshake complete");
        Ok(Self {
            stream,
            closed: false,
        })
    }
}

#[async_trait::async_trait]
impl Transport for WebSocketTransport {
    #[instrument(skip(self))]
    async fn send(&mut self, event: &OutboundEvent) -> Result<(), SyncError> {
        let frame = event.encode()?;
        trace!(%frame, "Sending frame");
        self.stream.send(Message::text(frame)).await?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<Option<InboundEvent>, SyncError> {
        while let Some(message) = self.stream.next().await {
            match message? {
                Message::Text(text) => {
                    trace!(frame = %text.as_str(), "Received frame");
                    return InboundEvent::decode(text.as_str()).map(Some);
                }
                Message::Close(frame) => {
                    info!(?frame, "Server closed the connection");
                    self.closed = true;
                    return Ok(None);
                }
                Message::Binary(_) => warn!("Ignoring binary frame"),
                // Ping/pong are answered by tungstenite
                _ => {}
            }
        }
        self.closed = true;
        Ok(None)
    }

    #[instrument(skip(self))]
    async fn close(&mut self) -> Result<(), SyncError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.stream.close(None).await?;
        info!("WebSocket closed");
        Ok(())
    }
}

/// In-process transport over tokio channels.
///
/// Frames pass through their JSON encoding so both ends see exactly what a
/// socket would carry.
#[derive(Debug)]
pub struct MemoryTransport {
    inbound: mpsc::UnboundedReceiver<String>,
    outbound: Option<mpsc::UnboundedSender<String>>,
}

/// Server end of a [`MemoryTransport`].
#[derive(Debug)]
pub struct MemoryServer {
    /// Frames for the client.
    pub to_client: mpsc::UnboundedSender<String>,
    /// Frames from the client.
    pub from_client: mpsc::UnboundedReceiver<String>,
}

impl MemoryServer {
    /// Sends an event to the client.
    pub fn send(&self, event: &InboundEvent) -> Result<(), SyncError> {
        let frame = serde_json::to_string(event)?;
        self.to_client
            .send(frame)
            .map_err(|_| SyncError::Transport("client dropped".to_string()))
    }

    /// Receives the client's next event, `None` once the client is gone.
    pub async fn recv(&mut self) -> Option<Result<OutboundEvent, SyncError>> {
        let frame = self.from_client.recv().await?;
        Some(serde_json::from_str(&frame).map_err(SyncError::from))
    }
}

impl MemoryTransport {
    /// Creates a connected client/server pair.
    pub fn pair() -> (Self, MemoryServer) {
        let (to_client, inbound) = mpsc::unbounded_channel();
        let (outbound, from_client) = mpsc::unbounded_channel();
        (
            Self {
                inbound,
                outbound: Some(outbound),
            },
            MemoryServer {
                to_client,
                from_client,
            },
        )
    }
}

#[async_trait::async_trait]
impl Transport for MemoryTransport {
    async fn send(&mut self, event: &OutboundEvent) -> Result<(), SyncError> {
        let outbound = self.outbound.as_ref().ok_or(SyncError::SessionLost)?;
        outbound
            .send(event.encode()?)
            .map_err(|_| SyncError::Transport("server dropped".to_string()))
    }

    async fn recv(&mut self) -> Result<Option<InboundEvent>, SyncError> {
        if self.outbound.is_none() {
            return Ok(None);
        }
        match self.inbound.recv().await {
            Some(frame) => InboundEvent::decode(&frame).map(Some),
            None => Ok(None),
        }
    }

    async fn close(&mut self) -> Result<(), SyncError> {
        // Dropping the sender ends the server's stream
        self.outbound = None;
        self.inbound.close();
        Ok(())
    }
}
