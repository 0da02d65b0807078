//! Single-writer match session.
//!
//! One task owns the [`Match`]. Front ends talk to it through cloneable
//! [`SessionHandle`]s; commands are applied one at a time, in arrival order,
//! so a transition is never observed half done.

use crate::Match;
use crate::games::tictactoe::{Mark, MoveRejection};
use crate::snapshot::MatchSnapshot;
use derive_getters::Getters;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// Commands accepted by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Play the current mark at a board index.
    Play(usize),
    /// Start the next round, optionally with an explicit starter.
    NextRound(Option<Mark>),
    /// Choose the starting mark, restarting the round.
    ChooseStarter(Mark),
    /// Reset scores and starter.
    ResetMatch,
    /// Read the state without changing it.
    Snapshot,
}

/// State after a command, plus why a move was ignored, if it was.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionReply {
    snapshot: MatchSnapshot,
    rejection: Option<MoveRejection>,
}

/// Error talking to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The session task has stopped.
    #[display("Match session has shut down")]
    Closed,
}

type Request = (SessionCommand, oneshot::Sender<SessionReply>);

/// Owner of a match, serving commands from a channel.
#[derive(Debug)]
pub struct MatchSession {
    game: Match,
    rx: mpsc::Receiver<Request>,
}

impl MatchSession {
    /// Spawns a session task owning `game` and returns a handle to it.
    ///
    /// The task ends once every handle is dropped.
    #[instrument(skip(game))]
    pub fn spawn(game: Match) -> SessionHandle {
        let (tx, rx) = mpsc::channel(32);
        let session = Self { game, rx };
        tokio::spawn(session.run());
        info!("Match session started");
        SessionHandle { tx }
    }

    async fn run(mut self) {
        while let Some((command, reply_tx)) = self.rx.recv().await {
            let reply = self.apply(command);
            if reply_tx.send(reply).is_err() {
                debug!(?command, "Caller went away before the reply");
            }
        }
        info!("Match session stopped");
    }

    #[instrument(skip(self))]
    fn apply(&mut self, command: SessionCommand) -> SessionReply {
        let rejection = match command {
            SessionCommand::Play(index) => self.game.play(index).err(),
            SessionCommand::NextRound(starter) => {
                self.game.start_next_round(starter);
                None
            }
            SessionCommand::ChooseStarter(mark) => {
                self.game.choose_starter(mark);
                None
            }
            SessionCommand::ResetMatch => {
                self.game.reset_match();
                None
            }
            SessionCommand::Snapshot => None,
        };
        SessionReply {
            snapshot: self.game.snapshot(),
            rejection,
        }
    }
}

/// Cloneable handle to a running [`MatchSession`].
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Request>,
}

impl SessionHandle {
    /// Sends a command and waits for the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has stopped.
    #[instrument(skip(self))]
    pub async fn send(&self, command: SessionCommand) -> Result<SessionReply, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send((command, reply_tx)).await.map_err(|_| {
            warn!("Session channel closed");
            SessionError::Closed
        })?;
        reply_rx.await.map_err(|_| SessionError::Closed)
    }

    /// Plays the current mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has stopped.
    pub async fn play(&self, index: usize) -> Result<SessionReply, SessionError> {
        self.send(SessionCommand::Play(index)).await
    }

    /// Starts the next round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has stopped.
    pub async fn next_round(&self, starter: Option<Mark>) -> Result<SessionReply, SessionError> {
        self.send(SessionCommand::NextRound(starter)).await
    }

    /// Chooses the starting mark.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has stopped.
    pub async fn choose_starter(&self, mark: Mark) -> Result<SessionReply, SessionError> {
        self.send(SessionCommand::ChooseStarter(mark)).await
    }

    /// Resets the match.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has stopped.
    pub async fn reset_match(&self) -> Result<SessionReply, SessionError> {
        self.send(SessionCommand::ResetMatch).await
    }

    /// Reads the current state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has stopped.
    pub async fn snapshot(&self) -> Result<MatchSnapshot, SessionError> {
        Ok(self.send(SessionCommand::Snapshot).await?.snapshot)
    }
}
