//! The shared N×N grid of marks.
//!
//! The board performs bounds checks but no legality checks: whether a
//! write is allowed is decided by [`super::moves::validate`] before the
//! turn coordinator calls [`Board::set`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::MAX_BOARD_SIZE;

/// Index of a participant in turn order. The host is always `0`.
pub type PlayerIndex = usize;

/// Errors from direct board access.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum BoardError {
    #[error("board size must be between 1 and {MAX_BOARD_SIZE}, got {0}")]
    InvalidSize(usize),
    #[error("cell ({row}, {column}) is outside a {size}x{size} board")]
    OutOfRange {
        row: usize,
        column: usize,
        size: usize,
    },
    #[error("board snapshot is not square")]
    NotSquare,
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Mark {
    #[default]
    #[serde(rename = "_")]
    Empty,
    X,
    O,
}

impl Mark {
    /// Mark played by the participant at `index` in turn order.
    #[must_use]
    pub const fn for_player(index: PlayerIndex) -> Self {
        if index % 2 == 0 { Self::X } else { Self::O }
    }

    /// The other player's mark. `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
            Self::Empty => Self::Empty,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Empty => "_",
            Self::X => "X",
            Self::O => "O",
        };
        write!(f, "{repr}")
    }
}

/// A square grid of marks, stored row-major.
///
/// Serializes as a list of rows so that a snapshot on the wire looks like
/// `[["_","X","_"],["O","_","_"],["_","_","_"]]`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<Vec<Mark>>", into = "Vec<Vec<Mark>>")]
pub struct Board {
    cells: Vec<Vec<Mark>>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero or larger than
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            cells: vec![vec![Mark::Empty; size]; size],
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside the board.
    pub fn get(&self, row: usize, column: usize) -> Result<Mark, BoardError> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .ok_or(BoardError::OutOfRange {
                row,
                column,
                size: self.size(),
            })
    }

    /// Overwrite a cell. Legality is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside the board.
    pub fn set(&mut self, row: usize, column: usize, mark: Mark) -> Result<(), BoardError> {
        let size = self.size();
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(BoardError::OutOfRange { row, column, size })?;
        *cell = mark;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside the board.
    pub fn is_occupied(&self, row: usize, column: usize) -> Result<bool, BoardError> {
        self.get(row, column).map(|mark| !mark.is_empty())
    }

    /// Row-major view of the grid.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|mark| !mark.is_empty())
            .count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }
}

impl TryFrom<Vec<Vec<Mark>>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Vec<Mark>>) -> Result<Self, Self::Error> {
        let size = cells.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        if cells.iter().any(|row| row.len() != size) {
            return Err(BoardError::NotSquare);
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Vec<Mark>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
