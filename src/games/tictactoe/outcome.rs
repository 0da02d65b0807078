//! Round outcome, derived from the board on demand.

use super::rules::{Win, check_winner, is_full};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Where a round stands.
///
/// Never stored: [`RoundOutcome::evaluate`] recomputes it from the board so
/// the outcome cannot drift from the squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Moves are still being accepted.
    InProgress,
    /// A mark completed a line.
    Won(Win),
    /// The board filled with no completed line.
    Draw,
}

impl RoundOutcome {
    /// Evaluates the outcome of `board`.
    pub fn evaluate(board: &Board) -> Self {
        if let Some(win) = check_winner(board) {
            RoundOutcome::Won(win)
        } else if is_full(board) {
            RoundOutcome::Draw
        } else {
            RoundOutcome::InProgress
        }
    }

    /// Returns the win, if the round was won.
    pub fn win(&self) -> Option<Win> {
        match self {
            RoundOutcome::Won(win) => Some(*win),
            _ => None,
        }
    }

    /// Returns the winning mark, if the round was won.
    pub fn winner(&self) -> Option<Mark> {
        self.win().map(|w| w.mark)
    }

    /// True once the round accepts no more moves.
    pub fn is_finished(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// The lifecycle phase this outcome puts the round in.
    pub fn phase(&self) -> RoundPhase {
        match self {
            RoundOutcome::InProgress => RoundPhase::AwaitingMove,
            RoundOutcome::Won(_) => RoundPhase::RoundWon,
            RoundOutcome::Draw => RoundPhase::RoundDraw,
        }
    }
}

/// Round lifecycle phase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Waiting for the current mark to move.
    #[display("awaiting move")]
    AwaitingMove,
    /// Round over, a mark won.
    #[display("round won")]
    RoundWon,
    /// Round over, drawn.
    #[display("round drawn")]
    RoundDraw,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_board_in_progress() {
        let outcome = RoundOutcome::evaluate(&Board::new());
        assert_eq!(outcome, RoundOutcome::InProgress);
        assert_eq!(outcome.phase(), RoundPhase::AwaitingMove);
        assert!(!outcome.is_finished());
    }

    #[test]
    fn test_win_takes_priority_over_full_board() {
        let board = Board::from([
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::O),
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::O),
        ]);
        let outcome = RoundOutcome::evaluate(&board);

        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(outcome.phase(), RoundPhase::RoundWon);
    }

    #[test]
    fn test_partial_board_without_line_in_progress() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::Center, Mark::O);
        assert_eq!(RoundOutcome::evaluate(&board), RoundOutcome::InProgress);
    }
}
