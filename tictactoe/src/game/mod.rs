//! Game rules and turn ownership.
//!
//! - [`board`]: the N×N grid of marks
//! - [`moves`]: parsing and validating typed moves
//! - [`win`]: three-in-a-row detection
//! - [`session`]: the turn state machine shared by host and participant

pub mod board;
pub mod constants;
pub mod moves;
pub mod session;
pub mod win;

pub use board::{Board, BoardError, Mark, PlayerIndex};
pub use moves::{IllegalReason, Move, MoveError};
pub use session::{Event, GameSession, Phase, Role, SessionError, Step, TurnAdvanced, TurnState};
pub use win::{Outcome, has_won};
