//! The ordered message pipe between the two sides of a game.

use async_trait::async_trait;
use log::debug;
use tokio::sync::mpsc;

use super::{
    errors::{ChannelError, Result},
    messages::Message,
};

/// A reliable, ordered, bidirectional message channel.
///
/// Implementations decode frames at the boundary so the game only ever
/// sees well-formed [`Message`]s.
#[async_trait]
pub trait Channel: Send {
    /// Send one message to the other side.
    async fn send(&mut self, message: &Message) -> Result<()>;

    /// Wait for the next message from the other side. Returns
    /// [`ChannelError::Closed`] once the other side is gone.
    async fn recv(&mut self) -> Result<Message>;
}

/// In-process channel that still round-trips every message through its
/// JSON encoding.
#[derive(Debug)]
pub struct MemoryChannel {
    outgoing: mpsc::UnboundedSender<String>,
    incoming: mpsc::UnboundedReceiver<String>,
}

impl MemoryChannel {
    /// Two connected ends.
    #[must_use]
    pub fn pair() -> (Self, Self) {
        let (a_tx, a_rx) = mpsc::unbounded_channel();
        let (b_tx, b_rx) = mpsc::unbounded_channel();
        (
            Self {
                outgoing: a_tx,
                incoming: b_rx,
            },
            Self {
                outgoing: b_tx,
                incoming: a_rx,
            },
        )
    }

    /// Push a raw frame, bypassing encoding. Lets tests inject garbage.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Closed`] if the other end was dropped.
    pub fn send_raw(&mut self, frame: impl Into<String>) -> Result<()> {
        self.outgoing
            .send(frame.into())
            .map_err(|_| ChannelError::Closed)
    }
}

#[async_trait]
impl Channel for MemoryChannel {
    async fn send(&mut self, message: &Message) -> Result<()> {
        let frame = message.encode()?;
        debug!("memory channel send: {frame}");
        self.send_raw(frame)
    }

    async fn recv(&mut self) -> Result<Message> {
        let frame = self.incoming.recv().await.ok_or(ChannelError::Closed)?;
        Message::decode(&frame)
    }
}
