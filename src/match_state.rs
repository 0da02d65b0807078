//! Round and match controller.
//!
//! A [`Match`] owns one board, one scoreboard and the turn state. Every
//! operation is a complete, synchronous transition: a move either applies in
//! full (board, turn and score together) or leaves everything untouched.

use crate::games::tictactoe::{
    Board, Mark, Move, MoveEffect, MoveRejection, RoundOutcome, RoundPhase, apply_move,
    assert_move_contract,
};
use crate::scoreboard::Scoreboard;
use crate::snapshot::MatchSnapshot;
use tracing::{debug, info, instrument};

/// A match of consecutive tic-tac-toe rounds between two marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    current: Mark,
    starter: Mark,
    default_starter: Mark,
    scoreboard: Scoreboard,
    history: Vec<Move>,
}

impl Match {
    /// Creates a match whose first round is opened by `default_starter`.
    ///
    /// The same mark opens again after [`Match::reset_match`].
    #[instrument]
    pub fn new(default_starter: Mark) -> Self {
        info!("Creating new match");
        Self {
            board: Board::new(),
            current: default_starter,
            starter: default_starter,
            default_starter,
            scoreboard: Scoreboard::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board of the current round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Mark to move. Once a round is over this is the mark that moved last.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Mark that opened the current round.
    pub fn starting_mark(&self) -> Mark {
        self.starter
    }

    /// Mark that opens a match after a reset.
    pub fn default_starter(&self) -> Mark {
        self.default_starter
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Moves played this round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the current round, recomputed from the board.
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::evaluate(&self.board)
    }

    /// Lifecycle phase of the current round.
    pub fn phase(&self) -> RoundPhase {
        self.outcome().phase()
    }

    /// True once the round accepts no more moves.
    pub fn is_round_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    /// Plays the current mark at board index `index` (0-8).
    ///
    /// On success the board, turn and scoreboard advance together. A
    /// rejected move changes nothing; the rejection only says why.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection`] for an off-board index, an occupied square,
    /// or a round that is already won.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn play(&mut self, index: usize) -> Result<MoveEffect, MoveRejection> {
        let winner = self.outcome().win();
        let application = match apply_move(&self.board, index, self.current, winner.as_ref()) {
            Ok(application) => application,
            Err(reason) => {
                debug!(%reason, "Move ignored");
                return Err(reason);
            }
        };

        let before = cfg!(debug_assertions).then(|| self.clone());

        let effect = *application.effect();
        self.board = *application.board();
        self.history.push(*application.applied());
        self.scoreboard.record(&effect);
        if let MoveEffect::Continue { next } = effect {
            self.current = next;
        }

        match effect {
            MoveEffect::Won(win) => {
                info!(winner = %win.mark, line = ?win.indices(), "Round won");
            }
            MoveEffect::Draw => info!("Round drawn"),
            MoveEffect::Continue { next } => debug!(%next, "Turn passes"),
        }

        if let Some(before) = before {
            assert_move_contract(&before, self);
        }

        Ok(effect)
    }

    /// Starts the next round and returns the mark that opens it.
    ///
    /// Without an explicit `starter` the opening mark alternates from the
    /// previous round's. Allowed at any time: an unfinished round is
    /// abandoned without being scored.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self, starter: Option<Mark>) -> Mark {
        if !self.is_round_finished() {
            debug!(phase = %self.phase(), "Abandoning unfinished round");
        }
        let next = starter.unwrap_or_else(|| self.starter.opponent());
        self.begin_round(next);
        info!(starter = %next, "Next round started");
        next
    }

    /// Sets the starting mark and restarts the round with it.
    ///
    /// Always allowed; an in-progress round is discarded unscored.
    #[instrument(skip(self))]
    pub fn choose_starter(&mut self, starter: Mark) {
        self.begin_round(starter);
        info!(%starter, "Starting mark chosen");
    }

    /// Zeroes the scoreboard and restarts with the default starter.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.scoreboard.reset();
        self.begin_round(self.default_starter);
        info!(starter = %self.default_starter, "Match reset");
    }

    /// Captures the match state for display or serialization.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(self)
    }

    fn begin_round(&mut self, starter: Mark) {
        self.starter = starter;
        self.current = starter;
        self.board = Board::new();
        self.history.clear();
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Mark::default())
    }
}
