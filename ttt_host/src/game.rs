//! The host side of a game.

use anyhow::{Context, Result};
use tictactoe::{
    Channel, GameSession, Message, Outcome, Role,
    coordinator::{Coordinator, InputSource, Renderer},
};
use tokio::sync::mpsc;
use tracing::info;

use crate::{api::Connection, channel::SocketChannel};

/// Wait for the participant, send it the board, then play as `X`.
///
/// Local moves aren't accepted until a participant is connected, so the
/// two boards always start from the same snapshot.
///
/// # Errors
///
/// Returns an error if the server stops before anyone joins, or if the
/// game ends without a result (disconnect, protocol violation, closed input).
pub async fn run<I, R>(
    board_size: usize,
    mut connections: mpsc::Receiver<Connection>,
    input: I,
    renderer: R,
) -> Result<Outcome>
where
    I: InputSource,
    R: Renderer,
{
    let session = GameSession::new(Role::Host, board_size).context("Invalid board size")?;

    info!("Waiting for a participant to connect");
    let connection = connections
        .recv()
        .await
        .context("Server stopped before a participant connected")?;
    info!(
        "Playing against participant {} ({})",
        connection.participant.id, connection.id
    );

    let mut channel = SocketChannel::new(connection.socket);
    channel
        .send(&Message::Init {
            board: session.board().clone(),
        })
        .await
        .context("Failed to send board snapshot")?;

    let mut coordinator = Coordinator::new(session, channel, input, renderer);
    let outcome = coordinator.run().await.context("Game aborted")?;
    Ok(outcome)
}
