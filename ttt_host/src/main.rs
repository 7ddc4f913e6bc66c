//! Hosts a tic-tac-toe game and plays `X` from this terminal.
//!
//! The game starts once a participant joins over `/ws`.

use std::net::SocketAddr;

use anyhow::{Context, Error};
use ctrlc::set_handler;
use pico_args::Arguments;
use tictactoe::coordinator::{StdinInput, TerminalRenderer};
use tokio::sync::mpsc;
use tracing::{error, info};
use ttt_host::{api, config::HostConfig, game, logging};

const HELP: &str = "\
Host a two-player tic-tac-toe game

USAGE:
  ttt_host [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --size       N           Rows and columns of the board  [default: env BOARD_SIZE or 3]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  BOARD_SIZE               Board size
  RUST_LOG                 Log filter (logs go to stderr)
";

struct Args {
    bind: Option<SocketAddr>,
    size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        size: pargs.opt_value_from_str("--size")?,
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    logging::init();

    let config = HostConfig::from_env(args.bind, args.size)?;
    config.validate()?;
    info!(
        "Hosting a {0}x{0} game at {1}",
        config.board_size, config.bind
    );

    let (connections, incoming) = mpsc::channel(1);
    let app = api::create_router(api::AppState::new(connections));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    println!(
        "Waiting for an opponent at ws://{}/ws. Press Ctrl+C to stop.",
        config.bind
    );

    let mut server = tokio::spawn(async move { axum::serve(listener, app).await });
    let game = game::run(
        config.board_size,
        incoming,
        StdinInput::new(),
        TerminalRenderer::new(),
    );

    tokio::select! {
        outcome = game => {
            let outcome = outcome?;
            info!("Game over: {}", outcome);
        }
        served = &mut server => {
            let served = served.context("Server task panicked")?;
            if let Err(e) = served {
                error!("Server error: {}", e);
                return Err(e.into());
            }
        }
    }

    server.abort();
    Ok(())
}
