//! Host side of a networked tic-tac-toe game.
//!
//! The host owns the authoritative board, serves a WebSocket for the
//! remote participant, and plays `X`.

pub mod api;
pub mod channel;
pub mod config;
pub mod game;
pub mod logging;
