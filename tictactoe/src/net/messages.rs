//! Wire messages exchanged between host and participant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::Result;
use crate::game::Board;

pub use crate::game::TurnAdvanced;

/// A message between host and participant, tagged by `kind` on the wire.
///
/// ```json
/// {"kind":"init","board":[["_","_"],["_","_"]]}
/// {"kind":"move","turnCounter":1,"move":{"row":0,"column":1}}
/// {"kind":"hello"}
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    /// Host to participant, once, right after the connection opens.
    Init { board: Board },
    /// Either direction: a move the sender already applied locally.
    Move(TurnAdvanced),
    /// Participant to host on connect. Carries nothing.
    Hello,
}

impl Message {
    /// # Errors
    ///
    /// Fails only if serialization itself fails, which the message types
    /// don't allow in practice.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns [`super::errors::ChannelError::Malformed`] for anything that
    /// isn't one of the known message shapes.
    pub fn decode(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Init { board } => write!(f, "init {0}x{0}", board.size()),
            Self::Move(turn) => write!(f, "move {} (turn {})", turn.mv, turn.turn_counter),
            Self::Hello => write!(f, "hello"),
        }
    }
}
