//! Internal modules for the tic-tac-toe client.
//!
//! This library provides the WebSocket channel and game loop used by the
//! ttt_client binary.

pub mod websocket_client;
