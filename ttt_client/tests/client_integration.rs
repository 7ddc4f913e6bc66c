//! Integration tests for ttt_client network functionality.
//!
//! Plays full games against a real host and checks how transport failures
//! surface.

use async_trait::async_trait;
use futures_util::SinkExt;
use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};
use tictactoe::{
    Board, Channel, ChannelError, Mark, Outcome,
    coordinator::{InputSource, Renderer},
};
use tokio::{net::TcpListener, sync::mpsc};
use tokio_tungstenite::{accept_async, connect_async, tungstenite::Message as WsMessage};
use ttt_client::websocket_client::{WebSocketClient, WsChannel};
use ttt_host::{
    api::{AppState, create_router},
    game,
};

struct ScriptedInput(VecDeque<String>);

impl ScriptedInput {
    fn new(tokens: &[&str]) -> Self {
        Self(tokens.iter().map(|t| t.to_string()).collect())
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn prompt_for_move(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.pop_front())
    }
}

/// Keeps the latest frame where the test can still reach it
#[derive(Clone, Default)]
struct LastBoard(Arc<Mutex<Option<Board>>>);

impl Renderer for LastBoard {
    fn render(&mut self, board: &Board) {
        *self.0.lock().unwrap() = Some(board.clone());
    }
}

/// Start a host on an ephemeral port and return its WebSocket URL
async fn start_host(
    board_size: usize,
    host_moves: &[&str],
) -> (String, tokio::task::JoinHandle<anyhow::Result<Outcome>>) {
    let (connections, incoming) = mpsc::channel(1);
    let app = create_router(AppState::new(connections));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    let game = tokio::spawn(game::run(
        board_size,
        incoming,
        ScriptedInput::new(host_moves),
        LastBoard::default(),
    ));
    (format!("ws://{addr}/ws"), game)
}

#[tokio::test]
async fn test_participant_wins_by_column() {
    // X O _
    // _ O X
    // X O _
    let (url, host) = start_host(3, &["a0", "b2", "c0"]).await;
    let client = WebSocketClient::new(url, 3);

    let renderer = LastBoard::default();
    let outcome = client
        .play(ScriptedInput::new(&["a1", "b1", "c1"]), renderer.clone())
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Win(Mark::O));
    assert_eq!(host.await.unwrap().unwrap(), Outcome::Win(Mark::O));

    let board = renderer.0.lock().unwrap().clone().unwrap();
    assert_eq!(board.occupied_count(), 6);
    assert_eq!(board.get(2, 1).unwrap(), Mark::O);
}

#[tokio::test]
async fn test_snapshot_size_replaces_local_default() {
    let (url, host) = start_host(4, &["a0", "a1", "a2"]).await;
    let client = WebSocketClient::new(url, 3);

    let outcome = client
        .play(ScriptedInput::new(&["d3", "d2"]), LastBoard::default())
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert_eq!(host.await.unwrap().unwrap(), Outcome::Win(Mark::X));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind and drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = WebSocketClient::new(format!("ws://{addr}/ws"), 3);
    let result = client
        .play(ScriptedInput::new(&[]), LastBoard::default())
        .await;

    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("Failed to connect"),
        "Error should indicate connection failure: {error_msg}"
    );
}

#[tokio::test]
async fn test_binary_frame_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(socket).await.unwrap();
        ws.send(WsMessage::binary(vec![1, 2, 3])).await.unwrap();
    });

    let (stream, _) = connect_async(format!("ws://{addr}")).await.unwrap();
    let mut channel = WsChannel::new(stream);
    assert!(matches!(
        channel.recv().await,
        Err(ChannelError::Transport(_))
    ));
}

#[tokio::test]
async fn test_server_close_is_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(socket).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let (stream, _) = connect_async(format!("ws://{addr}")).await.unwrap();
    let mut channel = WsChannel::new(stream);
    assert!(matches!(channel.recv().await, Err(ChannelError::Closed)));
}
