//! Three-in-a-row detection.
//!
//! Only horizontal and vertical runs count. Boards smaller than the run
//! length can never produce a winner.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    board::{Board, Mark},
    constants::WIN_LENGTH,
};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win(mark) => write!(f, "{mark} wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Whether `mark` fills any horizontal or vertical window of
/// [`WIN_LENGTH`] cells.
#[must_use]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark.is_empty() {
        return false;
    }
    let rows = board.rows();
    let size = board.size();
    let owns = |row: usize, column: usize| rows[row][column] == mark;
    for row in 0..size {
        for column in 0..size {
            let horizontal =
                column + WIN_LENGTH <= size && (0..WIN_LENGTH).all(|i| owns(row, column + i));
            let vertical =
                row + WIN_LENGTH <= size && (0..WIN_LENGTH).all(|i| owns(row + i, column));
            if horizontal || vertical {
                return true;
            }
        }
    }
    false
}

/// Result of the game after `last` was just played, if it's over.
#[must_use]
pub fn outcome(board: &Board, last: Mark) -> Option<Outcome> {
    if has_won(board, last) {
        Some(Outcome::Win(last))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let cells = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Mark::X,
                        'O' => Mark::O,
                        _ => Mark::Empty,
                    })
                    .collect()
            })
            .collect::<Vec<Vec<Mark>>>();
        Board::try_from(cells).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new(3).unwrap();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert!(!has_won(&board, Mark::Empty));
    }

    #[test]
    fn test_full_row_wins() {
        let board = board_from(&["XXX", "OO_", "___"]);
        assert!(has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_full_column_wins() {
        let board = board_from(&["O_X", "O_X", "O__"]);
        assert!(has_won(&board, Mark::O));
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_windows_anywhere_on_larger_boards() {
        let board = board_from(&["_____", "_____", "__OOO", "_____", "_____"]);
        assert!(has_won(&board, Mark::O));
        let board = board_from(&["____", "___X", "___X", "___X"]);
        assert!(has_won(&board, Mark::X));
    }

    #[test]
    fn test_diagonals_are_not_detected() {
        let board = board_from(&["X__", "_X_", "__X"]);
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_small_boards_never_win() {
        let board = board_from(&["XX", "XX"]);
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_outcome_reports_draw_on_full_board() {
        let board = board_from(&["XOX", "XOO", "OXX"]);
        assert_eq!(outcome(&board, Mark::X), Some(Outcome::Draw));
        let board = board_from(&["XOX", "XO_", "X__"]);
        assert_eq!(outcome(&board, Mark::X), Some(Outcome::Win(Mark::X)));
        let board = board_from(&["XO_", "___", "___"]);
        assert_eq!(outcome(&board, Mark::O), None);
    }
}
