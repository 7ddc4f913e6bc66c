//! Host-side bookkeeping of connected participants.
//!
//! Entries are added when a connection opens and are never removed. A
//! disconnect ends the game, so a stale entry can't block a live one.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use thiserror::Error;
use uuid::Uuid;

use crate::game::{Mark, PlayerIndex, constants::PARTICIPANTS};

#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RegistryError {
    #[error("game is full")]
    CapacityReached,
}

/// Opaque handle for one accepted connection.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ConnectionId(u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// What the host knows about a remote player.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Participant {
    pub id: Uuid,
    pub index: PlayerIndex,
    pub mark: Mark,
}

#[derive(Debug)]
pub struct Registry {
    next_id: u64,
    capacity: usize,
    participants: HashMap<ConnectionId, Participant>,
}

impl Default for Registry {
    fn default() -> Self {
        // The host itself takes one of the seats.
        Self::with_capacity(PARTICIPANTS - 1)
    }
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: 0,
            capacity,
            participants: HashMap::new(),
        }
    }

    /// Record a new connection and seat it after the host.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityReached`] when every remote seat is
    /// taken.
    pub fn register(&mut self) -> Result<(ConnectionId, Participant), RegistryError> {
        if self.is_full() {
            return Err(RegistryError::CapacityReached);
        }
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        let index = self.participants.len() + 1;
        let participant = Participant {
            id: Uuid::new_v4(),
            index,
            mark: Mark::for_player(index),
        };
        self.participants.insert(id, participant.clone());
        Ok((id, participant))
    }

    #[must_use]
    pub fn get(&self, id: ConnectionId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.capacity
    }
}
