//! Host configuration management.
//!
//! Consolidates environment variable reads and provides validated configuration.

use std::net::SocketAddr;
use tictactoe::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Address the host listens on when nothing else is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Complete host configuration loaded from CLI overrides and environment
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Rows (and columns) of the board
    pub board_size: usize,
}

impl HostConfig {
    /// Load configuration, preferring CLI overrides, then environment
    /// variables, then defaults
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address (from `--bind`)
    /// * `size_override` - Optional board size (from `--size`)
    ///
    /// # Errors
    ///
    /// Returns error if an environment variable is set but can't be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        size_override: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_env("SERVER_BIND")?.unwrap_or_else(default_bind),
        };

        let board_size = match size_override {
            Some(size) => size,
            None => parse_env("BOARD_SIZE")?.unwrap_or(DEFAULT_BOARD_SIZE),
        };

        Ok(HostConfig { bind, board_size })
    }

    /// Validate configuration after loading
    ///
    /// # Errors
    ///
    /// Returns error if the board size can't be played
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid {
                var: "BOARD_SIZE".to_string(),
                reason: format!("Must be between 1 and {MAX_BOARD_SIZE}"),
            });
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// Parse an environment variable if it's set
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse().map(Some).map_err(|e| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("{value:?}: {e}"),
        }),
        Err(_) => Ok(None),
    }
}
