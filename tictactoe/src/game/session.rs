//! Turn-ownership state machine.
//!
//! A [`GameSession`] owns one side's copy of the board and the turn
//! counter. Both sides start from the same empty (or snapshotted) board
//! and apply every move in the order it was announced, so the copies stay
//! identical without ever exchanging full state after the snapshot.
//!
//! Every input is an [`Event`] and [`GameSession::handle`] dispatches it to
//! exactly one transition function. Transitions never perform I/O; they
//! return a [`Step`] describing what the caller should render or send.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{
    board::{Board, BoardError, Mark, PlayerIndex},
    constants::PARTICIPANTS,
    moves::{self, Move, MoveError},
    win::{self, Outcome},
};

/// Errors that end a session. These mean the two boards can no longer be
/// trusted to agree.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum SessionError {
    #[error("remote move arrived while it was our turn")]
    OutOfTurn,
    #[error("remote turn counter {received} doesn't follow local counter {expected}")]
    TurnMismatch { expected: u64, received: u64 },
    #[error("remote move can't be mirrored: {0}")]
    IllegalRemoteMove(MoveError),
    #[error("board snapshot is only accepted once, by the participant, before any move")]
    UnexpectedSnapshot,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Which end of the channel this session runs on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Role {
    Host,
    Participant,
}

impl Role {
    #[must_use]
    pub const fn player_index(self) -> PlayerIndex {
        match self {
            Self::Host => 0,
            Self::Participant => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Host => "host",
            Self::Participant => "participant",
        };
        write!(f, "{repr}")
    }
}

/// Announcement of a completed, already-validated move. `turn_counter` is
/// the counter value *after* the move.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TurnAdvanced {
    #[serde(rename = "turnCounter")]
    pub turn_counter: u64,
    #[serde(rename = "move")]
    pub mv: Move,
}

/// Whose move it is and who we are.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TurnState {
    pub turn_counter: u64,
    pub local_index: PlayerIndex,
    pub local_mark: Mark,
}

impl TurnState {
    #[must_use]
    pub const fn new(local_index: PlayerIndex) -> Self {
        Self {
            turn_counter: 0,
            local_index,
            local_mark: Mark::for_player(local_index),
        }
    }

    /// Participant allowed to move at the current counter.
    #[must_use]
    pub const fn current_player(&self) -> PlayerIndex {
        (self.turn_counter % PARTICIPANTS as u64) as PlayerIndex
    }

    #[must_use]
    pub const fn is_local_turn(&self) -> bool {
        self.current_player() == self.local_index
    }

    /// Mark of whoever plays at the current counter.
    #[must_use]
    pub const fn current_mark(&self) -> Mark {
        Mark::for_player(self.current_player())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    AwaitingLocalMove,
    AwaitingRemoteTurn,
    GameOver(Outcome),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Raw text typed by the local player.
    LocalMoveSubmitted(String),
    /// A move the other side announced over the channel.
    RemoteTurnAdvanced(TurnAdvanced),
    /// The host's board, sent once when the participant connects.
    InitialSnapshot(Board),
    WinDetected(Mark),
}

/// What the caller should do after an event was handled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// The board changed and should be rendered. Local moves carry the
    /// announcement to send to the other side.
    Applied { announce: Option<TurnAdvanced> },
    /// The local move was rejected; ask for another one.
    Reprompt(MoveError),
    /// Nothing to render or send.
    Ignored,
}

/// One side's board plus turn bookkeeping.
#[derive(Clone, Debug)]
pub struct GameSession {
    role: Role,
    board: Board,
    turn: TurnState,
    phase: Phase,
    bootstrapped: bool,
}

impl GameSession {
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for an unusable board size.
    pub fn new(role: Role, board_size: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(role, Board::new(board_size)?))
    }

    /// Start from an existing board, deriving the turn counter from how
    /// many cells are already taken.
    #[must_use]
    pub fn with_board(role: Role, board: Board) -> Self {
        let mut session = Self {
            role,
            turn: TurnState::new(role.player_index()),
            phase: Phase::AwaitingRemoteTurn,
            bootstrapped: role == Role::Host,
            board,
        };
        session.resync();
        session
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn local_mark(&self) -> Mark {
        self.turn.local_mark
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Whether the board is still a local placeholder that a snapshot may
    /// replace.
    #[must_use]
    pub fn awaits_snapshot(&self) -> bool {
        !self.bootstrapped && self.turn.turn_counter == 0
    }

    /// Feed one event through the state machine.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when a remote event would make the two
    /// boards diverge. Local mistakes are reported as [`Step::Reprompt`].
    pub fn handle(&mut self, event: Event) -> Result<Step, SessionError> {
        if self.is_over() {
            debug!("{} ignoring {event:?} after game over", self.role);
            return Ok(Step::Ignored);
        }
        match event {
            Event::LocalMoveSubmitted(token) => self.on_local_move(&token),
            Event::RemoteTurnAdvanced(turn) => self.on_remote_turn(turn),
            Event::InitialSnapshot(board) => self.on_snapshot(board),
            Event::WinDetected(mark) => Ok(self.on_win(mark)),
        }
    }

    fn on_local_move(&mut self, token: &str) -> Result<Step, SessionError> {
        if self.phase != Phase::AwaitingLocalMove {
            return Ok(Step::Ignored);
        }
        let parsed = Move::parse(token).and_then(|mv| moves::validate(&self.board, &mv).map(|()| mv));
        let mv = match parsed {
            Ok(mv) => mv,
            Err(error) => {
                debug!("{} rejected local move: {error}", self.role);
                return Ok(Step::Reprompt(error));
            }
        };
        let mark = self.turn.local_mark;
        self.board.set(mv.row, mv.column, mark)?;
        self.turn.turn_counter += 1;
        debug!(
            "{} played {mv} as {mark}, turn counter now {}",
            self.role, self.turn.turn_counter
        );
        let announce = TurnAdvanced {
            turn_counter: self.turn.turn_counter,
            mv,
        };
        self.settle(mark);
        Ok(Step::Applied {
            announce: Some(announce),
        })
    }

    fn on_remote_turn(&mut self, turn: TurnAdvanced) -> Result<Step, SessionError> {
        if self.phase != Phase::AwaitingRemoteTurn {
            return Err(SessionError::OutOfTurn);
        }
        let expected = self.turn.turn_counter + 1;
        if turn.turn_counter != expected {
            return Err(SessionError::TurnMismatch {
                expected,
                received: turn.turn_counter,
            });
        }
        moves::validate(&self.board, &turn.mv).map_err(SessionError::IllegalRemoteMove)?;
        let mark = self.turn.local_mark.opponent();
        self.board.set(turn.mv.row, turn.mv.column, mark)?;
        self.turn.turn_counter = turn.turn_counter;
        debug!(
            "{} mirrored {} as {mark}, turn counter now {}",
            self.role, turn.mv, self.turn.turn_counter
        );
        self.settle(mark);
        Ok(Step::Applied { announce: None })
    }

    fn on_snapshot(&mut self, board: Board) -> Result<Step, SessionError> {
        if self.bootstrapped || self.turn.turn_counter != 0 {
            return Err(SessionError::UnexpectedSnapshot);
        }
        debug!(
            "{} loaded {size}x{size} snapshot with {marks} marks",
            self.role,
            size = board.size(),
            marks = board.occupied_count()
        );
        self.board = board;
        self.bootstrapped = true;
        self.resync();
        Ok(Step::Applied { announce: None })
    }

    fn on_win(&mut self, mark: Mark) -> Step {
        debug!("{} game over: {mark} wins", self.role);
        self.phase = Phase::GameOver(Outcome::Win(mark));
        Step::Ignored
    }

    /// Check for the end of the game after `last` was placed, otherwise
    /// hand the turn to whoever owns the new counter.
    fn settle(&mut self, last: Mark) {
        match win::outcome(&self.board, last) {
            Some(Outcome::Win(mark)) => {
                self.on_win(mark);
            }
            Some(Outcome::Draw) => self.phase = Phase::GameOver(Outcome::Draw),
            None => self.phase = self.phase_for_counter(),
        }
    }

    fn phase_for_counter(&self) -> Phase {
        if self.turn.is_local_turn() {
            Phase::AwaitingLocalMove
        } else {
            Phase::AwaitingRemoteTurn
        }
    }

    fn resync(&mut self) {
        self.turn.turn_counter = self.board.occupied_count() as u64;
        self.phase = self.phase_for_counter();
        let last = self.turn.current_mark().opponent();
        if self.board.occupied_count() > 0
            && let Some(outcome) = win::outcome(&self.board, last)
        {
            self.phase = Phase::GameOver(outcome);
        }
    }
}
