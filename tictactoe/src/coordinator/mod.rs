//! Drives a [`GameSession`](crate::game::GameSession) against real I/O.
//!
//! This module implements:
//! - Coordinator: the per-process event loop for one side of a game
//! - InputSource / Renderer: the local collaborators it needs
//! - StdinInput / TerminalRenderer: terminal implementations of both
//!
//! ## Architecture
//!
//! One event is processed to completion at a time. While it's our turn the
//! loop waits only on local input; otherwise it waits only on the channel.
//! Nothing else touches the board, so there is no locking.
//!
//! ## Example
//!
//! ```no_run
//! use tictactoe::{
//!     coordinator::{Coordinator, StdinInput, TerminalRenderer},
//!     game::{GameSession, Role},
//!     net::channel::MemoryChannel,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (channel, _peer) = MemoryChannel::pair();
//! let session = GameSession::new(Role::Host, 3)?;
//! let outcome = Coordinator::new(session, channel, StdinInput::new(), TerminalRenderer::new())
//!     .run()
//!     .await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod io;

pub use driver::{Coordinator, CoordinatorError};
pub use io::{InputSource, Notice, Renderer, StdinInput, TerminalRenderer};
