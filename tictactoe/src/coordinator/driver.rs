//! The event loop for one side of a game.

use log::{debug, info, warn};
use thiserror::Error;

use super::io::{InputSource, Notice, Renderer};
use crate::{
    game::{Event, GameSession, Outcome, Phase, SessionError, Step},
    net::{channel::Channel, errors::ChannelError, messages::Message},
};

/// Errors that stop the coordinator before the game is decided.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error("protocol violation: {0}")]
    Session(#[from] SessionError),
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
    #[error("local input closed")]
    InputClosed,
}

/// Owns one side's [`GameSession`] and its collaborators.
pub struct Coordinator<C, I, R> {
    session: GameSession,
    channel: C,
    input: I,
    renderer: R,
}

impl<C, I, R> Coordinator<C, I, R>
where
    C: Channel,
    I: InputSource,
    R: Renderer,
{
    pub fn new(session: GameSession, channel: C, input: I, renderer: R) -> Self {
        Self {
            session,
            channel,
            input,
            renderer,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Give back the pieces, e.g. to inspect the board after a game.
    pub fn into_parts(self) -> (GameSession, C, I, R) {
        (self.session, self.channel, self.input, self.renderer)
    }

    /// Play until the game is decided.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] if the channel fails, the other side
    /// breaks the protocol, or local input ends mid-game.
    pub async fn run(&mut self) -> Result<Outcome, CoordinatorError> {
        info!(
            "{} playing {} on a {}x{} board",
            self.session.role(),
            self.session.local_mark(),
            self.session.board().size(),
            self.session.board().size()
        );
        // A participant's placeholder board is drawn only once the snapshot
        // or the first move replaces it.
        if !self.session.awaits_snapshot() {
            self.renderer.render(self.session.board());
        }
        let mut waiting_announced = false;

        loop {
            match self.session.phase() {
                Phase::GameOver(outcome) => {
                    info!("{} finished: {outcome}", self.session.role());
                    self.renderer.notify(&Notice::GameOver {
                        outcome,
                        local_mark: self.session.local_mark(),
                    });
                    return Ok(outcome);
                }
                Phase::AwaitingLocalMove => {
                    waiting_announced = false;
                    self.local_turn().await?;
                }
                Phase::AwaitingRemoteTurn => {
                    if !waiting_announced {
                        self.renderer.notify(&Notice::WaitingForOpponent);
                        waiting_announced = true;
                    }
                    self.remote_turn().await?;
                }
            }
        }
    }

    async fn local_turn(&mut self) -> Result<(), CoordinatorError> {
        self.renderer
            .notify(&Notice::YourTurn(self.session.local_mark()));
        loop {
            let token = self
                .input
                .prompt_for_move()
                .await?
                .ok_or(CoordinatorError::InputClosed)?;
            match self.session.handle(Event::LocalMoveSubmitted(token))? {
                Step::Reprompt(error) => self.renderer.notify(&Notice::Rejected(error)),
                Step::Applied { announce } => {
                    self.renderer.render(self.session.board());
                    if let Some(turn) = announce {
                        self.channel.send(&Message::Move(turn)).await?;
                    }
                    return Ok(());
                }
                Step::Ignored => return Ok(()),
            }
        }
    }

    async fn remote_turn(&mut self) -> Result<(), CoordinatorError> {
        let event = match self.channel.recv().await? {
            Message::Move(turn) => Event::RemoteTurnAdvanced(turn),
            Message::Init { board } => Event::InitialSnapshot(board),
            Message::Hello => {
                debug!("{} got hello", self.session.role());
                return Ok(());
            }
        };
        match self.session.handle(event) {
            Ok(Step::Applied { .. }) => self.renderer.render(self.session.board()),
            Ok(_) => {}
            Err(error) => {
                warn!("{} rejecting remote traffic: {error}", self.session.role());
                return Err(error.into());
            }
        }
        Ok(())
    }
}
