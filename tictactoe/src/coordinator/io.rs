//! Local collaborators of the coordinator: where moves come from and where
//! the board goes.

use async_trait::async_trait;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::game::{Board, Mark, MoveError, Outcome};

/// Status changes worth showing the local player.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    YourTurn(Mark),
    WaitingForOpponent,
    Rejected(MoveError),
    GameOver { outcome: Outcome, local_mark: Mark },
}

/// Source of moves typed by the local player.
#[async_trait]
pub trait InputSource: Send {
    /// Ask for one move. `Ok(None)` means input is exhausted.
    async fn prompt_for_move(&mut self) -> io::Result<Option<String>>;
}

/// Sink for board snapshots and status notices.
pub trait Renderer: Send {
    fn render(&mut self, board: &Board);

    fn notify(&mut self, _notice: &Notice) {}
}

/// Reads moves line by line from standard input.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputSource for StdinInput {
    async fn prompt_for_move(&mut self) -> io::Result<Option<String>> {
        print!("What is your move? ");
        io::stdout().flush()?;
        self.lines.next_line().await
    }
}

/// Prints the board with row letters and column numbers.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Board layout used by [`TerminalRenderer`].
///
/// ```text
///    0 1 2
/// a  X _ _
/// b  _ O _
/// c  _ _ _
/// ```
#[must_use]
pub fn format_board(board: &Board) -> String {
    let header: Vec<String> = (0..board.size()).map(|column| column.to_string()).collect();
    let mut out = format!("   {}\n", header.join(" "));
    for (row, letter) in board.rows().iter().zip('a'..='z') {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&format!("{letter}  {}\n", cells.join(" ")));
    }
    out
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, board: &Board) {
        println!("\n{}", format_board(board));
    }

    fn notify(&mut self, notice: &Notice) {
        match notice {
            Notice::YourTurn(mark) => println!("Your turn, you are {mark}."),
            Notice::WaitingForOpponent => println!("Waiting for the other player..."),
            Notice::Rejected(error) => println!("{error}. Try again."),
            Notice::GameOver {
                outcome: Outcome::Win(mark),
                local_mark,
            } if mark == local_mark => println!("You win!"),
            Notice::GameOver {
                outcome: Outcome::Win(mark),
                ..
            } => println!("{mark} wins. Better luck next time."),
            Notice::GameOver {
                outcome: Outcome::Draw,
                ..
            } => println!("Board full, it's a draw."),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of moves, then reports end of input.
    pub struct ScriptedInput {
        tokens: VecDeque<String>,
    }

    impl ScriptedInput {
        pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
            Self {
                tokens: tokens.into_iter().map(Into::into).collect(),
            }
        }
    }

    #[async_trait]
    impl InputSource for ScriptedInput {
        async fn prompt_for_move(&mut self) -> io::Result<Option<String>> {
            Ok(self.tokens.pop_front())
        }
    }

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub boards: Vec<Board>,
        pub notices: Vec<Notice>,
    }

    impl RecordingRenderer {
        pub fn rejections(&self) -> usize {
            self.notices
                .iter()
                .filter(|notice| matches!(notice, Notice::Rejected(_)))
                .count()
        }
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, board: &Board) {
            self.boards.push(board.clone());
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    #[test]
    fn test_format_board_labels_rows_and_columns() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        assert_eq!(
            format_board(&board),
            "   0 1 2\na  X _ _\nb  _ O _\nc  _ _ _\n"
        );
    }
}
