//! Structured logging configuration.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log lines go to stderr so they don't interleave with the board on
/// stdout. Levels are configurable via the `RUST_LOG` env var. Records
/// emitted through the `log` facade by the game library are captured too.
///
/// # Example
///
/// ```no_run
/// use ttt_host::logging;
///
/// logging::init();
/// tracing::info!("Host starting");
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Structured logging initialized");
}

/// Log a participant joining, with structured fields
pub fn log_participant_joined(connection: &str, participant: &str, mark: &str) {
    tracing::info!(
        connection = connection,
        participant = participant,
        mark = mark,
        "Participant joined"
    );
}

/// Log a connection turned away because the game is full
pub fn log_participant_rejected(reason: &str) {
    tracing::warn!(reason = reason, "Participant rejected");
}
