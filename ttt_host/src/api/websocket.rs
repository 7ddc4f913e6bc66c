//! WebSocket endpoint through which the remote participant joins.
//!
//! # Connection Flow
//!
//! 1. Participant connects via `GET /ws`
//! 2. Host registers the connection, or refuses with 409 when full
//! 3. The upgraded socket is handed to the game task, which sends the
//!    board snapshot and starts taking turns

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tictactoe::registry::{ConnectionId, Participant};
use tracing::{error, info};

use super::AppState;
use crate::logging;

/// A registered participant whose WebSocket is ready to play.
pub struct Connection {
    pub id: ConnectionId,
    pub participant: Participant,
    pub socket: WebSocket,
}

/// Upgrade an HTTP connection to the game WebSocket.
///
/// # Response
///
/// On success, upgrades to the WebSocket protocol (101 Switching Protocols).
/// If a participant already joined, returns `409 Conflict`.
pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let registered = state.registry.lock().await.register();
    let (id, participant) = match registered {
        Ok(entry) => entry,
        Err(e) => {
            logging::log_participant_rejected(&e.to_string());
            return (StatusCode::CONFLICT, e.to_string()).into_response();
        }
    };

    logging::log_participant_joined(
        &id.to_string(),
        &participant.id.to_string(),
        &participant.mark.to_string(),
    );

    let connections = state.connections.clone();
    ws.on_upgrade(move |socket| async move {
        info!("WebSocket upgraded: {}", id);
        let connection = Connection {
            id,
            participant,
            socket,
        };
        if connections.send(connection).await.is_err() {
            error!("Game task is gone, dropping {}", id);
        }
    })
}
