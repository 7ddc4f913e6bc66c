//! HTTP/WebSocket API for the host.
//!
//! # Endpoints Overview
//!
//! - `GET /health` - Host health and number of connected participants
//! - `GET /ws` - Join the game as the remote participant (WebSocket upgrade)
//!
//! Only one participant can join. Later upgrade requests are refused with
//! `409 Conflict` before the handshake completes.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ttt_host::api::{AppState, create_router};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (connections, _incoming) = tokio::sync::mpsc::channel(1);
//! let app = create_router(AppState::new(connections));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod websocket;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tictactoe::Registry;
use tokio::sync::{Mutex, mpsc};

pub use websocket::Connection;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request (cheap due to Arc wrappers).
///
/// # Fields
///
/// - `registry`: Participants seated so far
/// - `connections`: Hands upgraded sockets to the game task
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Mutex<Registry>>,
    pub connections: mpsc::Sender<Connection>,
}

impl AppState {
    pub fn new(connections: mpsc::Sender<Connection>) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
            connections,
        }
    }
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(websocket::websocket_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    participants: usize,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let participants = state.registry.lock().await.len();
    Json(HealthResponse {
        status: "ok",
        participants,
    })
}
