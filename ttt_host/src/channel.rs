//! [`Channel`] over an axum WebSocket.

use async_trait::async_trait;
use axum::extract::ws::{Message as WsMessage, WebSocket};
use tictactoe::{Channel, ChannelError, Message};

/// The host's end of the game channel. Each text frame carries one
/// JSON-encoded [`Message`].
pub struct SocketChannel {
    socket: WebSocket,
}

impl SocketChannel {
    pub fn new(socket: WebSocket) -> Self {
        Self { socket }
    }
}

#[async_trait]
impl Channel for SocketChannel {
    async fn send(&mut self, message: &Message) -> Result<(), ChannelError> {
        let text = message.encode()?;
        self.socket
            .send(WsMessage::Text(text.into()))
            .await
            .map_err(|e| ChannelError::Transport(e.to_string()))
    }

    async fn recv(&mut self) -> Result<Message, ChannelError> {
        loop {
            match self.socket.recv().await {
                Some(Ok(WsMessage::Text(text))) => return Message::decode(text.as_str()),
                Some(Ok(WsMessage::Binary(_))) => {
                    return Err(ChannelError::Transport(
                        "binary frames are not supported".to_string(),
                    ));
                }
                // Control frames are answered by axum itself.
                Some(Ok(WsMessage::Ping(_) | WsMessage::Pong(_))) => {}
                Some(Ok(WsMessage::Close(_))) | None => return Err(ChannelError::Closed),
                Some(Err(e)) => return Err(ChannelError::Transport(e.to_string())),
            }
        }
    }
}
