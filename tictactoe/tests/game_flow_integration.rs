/// Integration tests for full games between a host and a participant
///
/// Both sides run a real `Coordinator` connected by a `MemoryChannel`,
/// with scripted keyboard input and a renderer that records every frame.
use async_trait::async_trait;
use std::{collections::VecDeque, io};
use tictactoe::{
    Board, Channel, GameSession, Mark, MemoryChannel, Message, Outcome, Role,
    coordinator::{Coordinator, CoordinatorError, InputSource, Notice, Renderer},
    game::has_won,
};

struct ScriptedInput(VecDeque<String>);

impl ScriptedInput {
    fn new(tokens: &[&str]) -> Self {
        Self(tokens.iter().map(|t| t.to_string()).collect())
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn prompt_for_move(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.pop_front())
    }
}

#[derive(Default)]
struct Frames {
    boards: Vec<Board>,
    notices: Vec<Notice>,
}

impl Renderer for Frames {
    fn render(&mut self, board: &Board) {
        self.boards.push(board.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

type Side = Coordinator<MemoryChannel, ScriptedInput, Frames>;

/// Both sides of a game, with the host's board snapshot already sent.
async fn sides(size: usize, host_moves: &[&str], participant_moves: &[&str]) -> (Side, Side) {
    let (mut host_channel, participant_channel) = MemoryChannel::pair();
    let host_session = GameSession::new(Role::Host, size).unwrap();
    host_channel
        .send(&Message::Init {
            board: host_session.board().clone(),
        })
        .await
        .unwrap();
    let host = Coordinator::new(
        host_session,
        host_channel,
        ScriptedInput::new(host_moves),
        Frames::default(),
    );
    let participant = Coordinator::new(
        GameSession::new(Role::Participant, size).unwrap(),
        participant_channel,
        ScriptedInput::new(participant_moves),
        Frames::default(),
    );
    (host, participant)
}

#[tokio::test]
async fn test_column_win_scenario() {
    let (mut host, mut participant) = sides(3, &["a0", "b0", "c0"], &["a1", "b1"]).await;

    let (host_result, participant_result) = tokio::join!(host.run(), participant.run());
    assert_eq!(host_result.unwrap(), Outcome::Win(Mark::X));
    assert_eq!(participant_result.unwrap(), Outcome::Win(Mark::X));

    let (host_session, _, _, host_frames) = host.into_parts();
    let (participant_session, _, _, participant_frames) = participant.into_parts();
    assert_eq!(host_session.board(), participant_session.board());
    assert_eq!(host_session.turn().turn_counter, 5);
    assert_eq!(participant_session.turn().turn_counter, 5);

    // Snapshot render plus one per move, and only the last frame is a win.
    assert_eq!(host_frames.boards.len(), 6);
    for (i, board) in host_frames.boards.iter().enumerate() {
        assert_eq!(has_won(board, Mark::X), i == 5, "frame {i}");
        assert!(!has_won(board, Mark::O));
    }
    assert_eq!(host_frames.boards, participant_frames.boards);

    assert_eq!(
        participant_frames.notices.last(),
        Some(&Notice::GameOver {
            outcome: Outcome::Win(Mark::X),
            local_mark: Mark::O
        })
    );
}

#[tokio::test]
async fn test_rejected_moves_never_cross_the_channel() {
    let (mut host, mut participant) =
        sides(3, &["x", "a0", "a0", "b0", "c0"], &["a0", "q7", "a1", "b1"]).await;

    let (host_result, participant_result) = tokio::join!(host.run(), participant.run());
    assert_eq!(host_result.unwrap(), Outcome::Win(Mark::X));
    assert_eq!(participant_result.unwrap(), Outcome::Win(Mark::X));

    let (host_session, _, _, host_frames) = host.into_parts();
    let (participant_session, _, _, participant_frames) = participant.into_parts();
    assert_eq!(host_session.board(), participant_session.board());
    assert_eq!(host_session.turn().turn_counter, 5);

    let rejected = |frames: &Frames| {
        frames
            .notices
            .iter()
            .filter(|n| matches!(n, Notice::Rejected(_)))
            .count()
    };
    assert_eq!(rejected(&host_frames), 2);
    assert_eq!(rejected(&participant_frames), 2);
}

#[tokio::test]
async fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let (mut host, mut participant) = sides(
        3,
        &["a0", "a2", "b0", "c1", "c2"],
        &["a1", "b1", "c0", "b2"],
    )
    .await;

    let (host_result, participant_result) = tokio::join!(host.run(), participant.run());
    assert_eq!(host_result.unwrap(), Outcome::Draw);
    assert_eq!(participant_result.unwrap(), Outcome::Draw);
    assert!(host.session().board().is_full());
    assert_eq!(host.session().board(), participant.session().board());
}

#[tokio::test]
async fn test_participant_bootstraps_from_snapshot() {
    let (mut host_end, participant_end) = MemoryChannel::pair();
    let mut board = Board::new(4).unwrap();
    board.set(3, 3, Mark::X).unwrap();
    host_end
        .send(&Message::Init { board })
        .await
        .unwrap();
    drop(host_end);

    let mut participant = Coordinator::new(
        GameSession::new(Role::Participant, 3).unwrap(),
        participant_end,
        ScriptedInput::new(&["b2"]),
        Frames::default(),
    );

    // One mark on the snapshot hands the turn to the participant. Its move
    // is applied locally before the send finds the host gone.
    let result = participant.run().await;
    assert!(matches!(result, Err(CoordinatorError::Channel(_))));

    let session = participant.session();
    assert_eq!(session.board().size(), 4);
    assert_eq!(session.board().get(3, 3).unwrap(), Mark::X);
    assert_eq!(session.board().get(1, 2).unwrap(), Mark::O);
    assert_eq!(session.turn().turn_counter, 2);
}
