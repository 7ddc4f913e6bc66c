//! Turning a typed token like `b2` into board coordinates.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::board::Board;

/// Why a well-formed move can't be played.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum IllegalReason {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::OutOfBounds => "off the board",
            Self::Occupied => "already taken",
        };
        write!(f, "{repr}")
    }
}

/// Errors for moves entered by the local player. Both are recovered by
/// asking for another move.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum MoveError {
    #[error("can't read move {0:?}, expected a row letter followed by a column number")]
    Malformed(String),
    #[error("illegal move {mv}: {reason}")]
    Illegal { mv: Move, reason: IllegalReason },
}

/// A cell address. Row comes from the token's letter, column from its digits.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Parse a token such as `a0` or `C12`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Malformed`] if the token doesn't start with an
    /// ASCII letter or the rest isn't a non-negative decimal integer.
    /// Whitespace is not stripped, so `" a0"` is malformed.
    pub fn parse(token: &str) -> Result<Self, MoveError> {
        let malformed = || MoveError::Malformed(token.to_string());
        let mut chars = token.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let column = digits.parse().map_err(|_| malformed())?;
        let row = usize::from(letter.to_ascii_lowercase() as u8 - b'a');
        Ok(Self { row, column })
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.row) {
            Ok(row) if row < 26 => write!(f, "{}{}", char::from(b'a' + row), self.column),
            _ => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

/// Check that `mv` lands on an empty cell inside `board`.
///
/// # Errors
///
/// Returns [`MoveError::Illegal`] if the move is off the board or the cell
/// is taken.
pub fn validate(board: &Board, mv: &Move) -> Result<(), MoveError> {
    let illegal = |reason| MoveError::Illegal { mv: *mv, reason };
    match board.is_occupied(mv.row, mv.column) {
        Ok(false) => Ok(()),
        Ok(true) => Err(illegal(IllegalReason::Occupied)),
        Err(_) => Err(illegal(IllegalReason::OutOfBounds)),
    }
}
