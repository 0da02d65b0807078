//! Serializable point-in-time view of a match.

use crate::Match;
use crate::games::tictactoe::{Board, Mark, RoundOutcome, RoundPhase};
use crate::scoreboard::Scoreboard;
use crate::view::status_label;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw a match, detached from it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Squares in row-major order; `None` is empty.
    cells: [Option<Mark>; 9],
    /// Mark to move (or the mark that moved last, once the round is over).
    current_mark: Mark,
    /// Mark that opened this round.
    starting_mark: Mark,
    /// Round tallies.
    scoreboard: Scoreboard,
    /// Round lifecycle phase.
    phase: RoundPhase,
    /// Winning mark, when the round was won.
    winner: Option<Mark>,
    /// Indices of the winning line, when the round was won.
    winning_line: Option<[usize; 3]>,
    /// Status text shown above the board.
    status: String,
}

impl MatchSnapshot {
    /// The board described by this snapshot.
    pub fn board(&self) -> Board {
        Board::from(self.cells)
    }

    /// True once the round accepts no more moves.
    pub fn is_round_finished(&self) -> bool {
        self.phase != RoundPhase::AwaitingMove
    }
}

impl From<&Match> for MatchSnapshot {
    fn from(game: &Match) -> Self {
        let outcome: RoundOutcome = game.outcome();
        let win = outcome.win();
        Self {
            cells: game.board().cells(),
            current_mark: game.current_mark(),
            starting_mark: game.starting_mark(),
            scoreboard: *game.scoreboard(),
            phase: outcome.phase(),
            winner: win.map(|w| w.mark),
            winning_line: win.map(|w| w.indices()),
            status: status_label(&outcome, game.current_mark()),
        }
    }
}
