//! Networking layer between host and participant.
//!
//! The game only needs an ordered, reliable channel of discrete JSON
//! messages. Concrete WebSocket transports live in the host and client
//! crates and implement [`channel::Channel`].

/// Transport-agnostic channel trait and an in-memory implementation.
pub mod channel;

/// Channel error types.
pub mod errors;

/// Message types exchanged between host and participant.
pub mod messages;

/// Host-side bookkeeping of connected participants.
pub mod registry;
