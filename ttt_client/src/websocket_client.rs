//! WebSocket client that joins a hosted game as the participant (`O`).

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info};
use tictactoe::{
    Channel, ChannelError, GameSession, Message, Outcome, Role,
    coordinator::{Coordinator, InputSource, Renderer, StdinInput, TerminalRenderer},
};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::{
    WebSocketStream, connect_async,
    tungstenite::{self, Message as WsMessage},
};

/// [`Channel`] over a tungstenite stream, one JSON message per text frame.
pub struct WsChannel<S> {
    stream: WebSocketStream<S>,
}

impl<S> WsChannel<S> {
    pub fn new(stream: WebSocketStream<S>) -> Self {
        Self { stream }
    }
}

fn transport(error: tungstenite::Error) -> ChannelError {
    match error {
        tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => {
            ChannelError::Closed
        }
        other => ChannelError::Transport(other.to_string()),
    }
}

#[async_trait]
impl<S> Channel for WsChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, message: &Message) -> Result<(), ChannelError> {
        let text = message.encode()?;
        self.stream
            .send(WsMessage::text(text))
            .await
            .map_err(transport)
    }

    async fn recv(&mut self) -> Result<Message, ChannelError> {
        while let Some(frame) = self.stream.next().await {
            match frame.map_err(transport)? {
                WsMessage::Text(text) => return Message::decode(text.as_str()),
                WsMessage::Binary(_) => {
                    return Err(ChannelError::Transport(
                        "binary frames are not supported".to_string(),
                    ));
                }
                WsMessage::Close(_) => return Err(ChannelError::Closed),
                // Pings are answered by tungstenite on the next read.
                WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => {}
            }
        }
        Err(ChannelError::Closed)
    }
}

/// WebSocket game client
pub struct WebSocketClient {
    ws_url: String,
    board_size: usize,
}

impl WebSocketClient {
    /// Create a new WebSocket client
    ///
    /// `board_size` is only used until the host's snapshot arrives.
    pub fn new(ws_url: String, board_size: usize) -> Self {
        Self { ws_url, board_size }
    }

    /// Connect and play from the terminal
    pub async fn connect_and_play(self) -> Result<Outcome> {
        self.play(StdinInput::new(), TerminalRenderer::new()).await
    }

    /// Connect, greet the host, and play with the given collaborators
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or the game ends without
    /// a result.
    pub async fn play<I, R>(self, input: I, renderer: R) -> Result<Outcome>
    where
        I: InputSource,
        R: Renderer,
    {
        info!("Connecting to {}", self.ws_url);
        let (stream, _) = connect_async(self.ws_url.as_str())
            .await
            .with_context(|| format!("Failed to connect to {}", self.ws_url))?;
        debug!("Connected to {}", self.ws_url);

        let mut channel = WsChannel::new(stream);
        channel
            .send(&Message::Hello)
            .await
            .context("Failed to greet the host")?;

        let session =
            GameSession::new(Role::Participant, self.board_size).context("Invalid board size")?;
        let mut coordinator = Coordinator::new(session, channel, input, renderer);
        let outcome = coordinator.run().await.context("Game aborted")?;
        Ok(outcome)
    }
}
