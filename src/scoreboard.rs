//! Match scoreboard.

use crate::games::tictactoe::{Mark, MoveEffect};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Round tallies for a match: wins per mark and draws.
///
/// Each finished round adds exactly one to one counter. Only a match reset
/// brings the counters back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total rounds scored.
    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Records a win for `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, "Win recorded");
    }

    /// Records a drawn round.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
        debug!(draws = self.draws, "Draw recorded");
    }

    /// Scores a move's effect. Moves that do not end the round score nothing.
    pub fn record(&mut self, effect: &MoveEffect) {
        match effect {
            MoveEffect::Won(win) => self.record_win(win.mark),
            MoveEffect::Draw => self.record_draw(),
            MoveEffect::Continue { .. } => {}
        }
    }

    /// Zeroes all counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}   O wins: {}   Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
