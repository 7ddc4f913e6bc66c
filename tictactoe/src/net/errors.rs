//! Channel error types.

use thiserror::Error;

/// Errors raised at the channel boundary. Any of these ends the session:
/// there is no reconnect.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The other side hung up.
    #[error("channel closed")]
    Closed,

    /// A frame arrived that isn't a valid message.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The underlying transport failed.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for channel operations
pub type Result<T> = std::result::Result<T, ChannelError>;
