//! # Tic-tac-toe over a channel
//!
//! A two-player tic-tac-toe game played by two processes, an authoritative
//! host and a remote participant, connected by an ordered message channel.
//! Each side keeps its own copy of the board and mirrors the other side's
//! announced moves.
//!
//! ## Architecture
//!
//! Each side runs a [`GameSession`] state machine in one of three phases:
//!
//! - **AwaitingLocalMove**: the local player may submit a move
//! - **AwaitingRemoteTurn**: waiting for the other side's announcement
//! - **GameOver**: terminal, nothing mutates the board any more
//!
//! The phase is derived from a shared turn counter: the participant whose
//! index equals `turn_counter % 2` is the only one allowed to move. The
//! host is index 0 and plays `X`.
//!
//! ## Core Modules
//!
//! - [`game`]: board, move parsing, win detection, and the turn state machine
//! - [`net`]: wire messages, the [`Channel`] trait, and the participant registry
//! - [`coordinator`]: the async loop tying a session to a channel, input, and a renderer
//!
//! ## Example
//!
//! ```
//! use tictactoe::{Event, GameSession, Mark, Phase, Role};
//!
//! let mut host = GameSession::new(Role::Host, 3).unwrap();
//! host.handle(Event::LocalMoveSubmitted("a0".to_string())).unwrap();
//!
//! assert_eq!(host.board().get(0, 0).unwrap(), Mark::X);
//! assert_eq!(host.phase(), Phase::AwaitingRemoteTurn);
//! ```

/// Async driver and local I/O collaborators.
pub mod coordinator;

/// Board, moves, win detection, and turn ownership.
pub mod game;
pub use game::{
    Board, BoardError, Event, GameSession, Mark, Move, MoveError, Outcome, Phase, Role,
    SessionError, Step, TurnAdvanced,
    constants::{self, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE},
};

/// Message schema and channel abstraction.
pub mod net;
pub use net::{
    channel::{Channel, MemoryChannel},
    errors::ChannelError,
    messages::{self, Message},
    registry::{self, Registry},
};
