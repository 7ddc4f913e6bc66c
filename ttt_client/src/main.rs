//! Joins a tic-tac-toe game hosted by `ttt_host` and plays `O`.

use anyhow::Result;
use pico_args::Arguments;
use tictactoe::DEFAULT_BOARD_SIZE;
use ttt_client::websocket_client::WebSocketClient;

const HELP: &str = "\
Join a two-player tic-tac-toe game

USAGE:
  ttt_client [OPTIONS]

OPTIONS:
  --server URL          Host WebSocket URL  [default: ws://127.0.0.1:8080/ws]
  --size N              Board size until the host's board arrives  [default: 3]

FLAGS:
  -h, --help            Print help information

ENVIRONMENT:
  RUST_LOG              Log filter (logs go to stderr)  [default: warn]
";

struct Args {
    server_url: String,
    board_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        server_url: pargs
            .opt_value_from_str("--server")?
            .unwrap_or_else(|| "ws://127.0.0.1:8080/ws".to_string()),
        board_size: pargs
            .opt_value_from_str("--size")?
            .unwrap_or(DEFAULT_BOARD_SIZE),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let client = WebSocketClient::new(args.server_url, args.board_size);
    let outcome = client.connect_and_play().await?;
    log::info!("Game over: {outcome}");
    Ok(())
}
