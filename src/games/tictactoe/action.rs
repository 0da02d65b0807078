//! Move application for tic-tac-toe.
//!
//! [`apply_move`] is the turn reducer: it takes a board and the mark to play
//! and returns a new board plus the effect of the move. It never touches the
//! board it was given.

use super::contracts::LegalMove;
use super::rules::{Win, check_winner, is_full};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was ignored.
///
/// A rejected move is a no-op: board, scores and turn stay as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The index does not name a square.
    #[display("Index {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square is already taken.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The round already has a winner.
    #[display("Round is already over")]
    RoundOver,
}

/// What a successful move did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// The move completed a line. The turn does not pass.
    Won(Win),
    /// The move filled the board with no line.
    Draw,
    /// The round goes on with `next` to move.
    Continue {
        /// Mark to move next.
        next: Mark,
    },
}

impl MoveEffect {
    /// True if the move ended the round.
    pub fn ends_round(&self) -> bool {
        !matches!(self, MoveEffect::Continue { .. })
    }
}

/// A new board together with the effect of the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct MoveApplication {
    /// The move that was applied.
    applied: Move,
    /// The board after the move.
    board: Board,
    /// What the move did to the round.
    effect: MoveEffect,
}

/// Places `current` at `index` on a copy of `board`.
///
/// Effects are decided in priority order: a completed line wins the round,
/// otherwise a full board draws it, otherwise the turn passes to the other
/// mark.
///
/// # Errors
///
/// Returns a [`MoveRejection`] if the index is off the board, the square is
/// occupied, or `existing_winner` says the round is already won.
#[instrument(skip(board, existing_winner))]
pub fn apply_move(
    board: &Board,
    index: usize,
    current: Mark,
    existing_winner: Option<&Win>,
) -> Result<MoveApplication, MoveRejection> {
    let position = LegalMove::check(board, index, existing_winner)?;

    let applied = Move::new(current, position);
    let next_board = board.with(position, current);

    let effect = if let Some(win) = check_winner(&next_board) {
        MoveEffect::Won(win)
    } else if is_full(&next_board) {
        MoveEffect::Draw
    } else {
        MoveEffect::Continue {
            next: current.opponent(),
        }
    };

    debug!(%applied, ?effect, "Move applied");

    Ok(MoveApplication {
        applied,
        board: next_board,
        effect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_toggles_turn() {
        let board = Board::new();
        let application = apply_move(&board, 4, Mark::X, None).expect("legal move");

        assert_eq!(
            *application.effect(),
            MoveEffect::Continue { next: Mark::O }
        );
        assert_eq!(application.applied().position, Position::Center);
        assert!(board.is_empty(Position::Center));
        assert!(!application.board().is_empty(Position::Center));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let board = Board::new().with(Position::Center, Mark::X);
        assert_eq!(
            apply_move(&board, 4, Mark::O, None),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            apply_move(&Board::new(), 9, Mark::X, None),
            Err(MoveRejection::OutOfBounds(9))
        );
    }

    #[test]
    fn test_existing_winner_rejects_move() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X);
        let win = check_winner(&board);

        assert_eq!(
            apply_move(&board, 8, Mark::O, win.as_ref()),
            Err(MoveRejection::RoundOver)
        );
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::O)
            .with(Position::Center, Mark::O);
        let application = apply_move(&board, 8, Mark::O, None).expect("legal move");

        match application.effect() {
            MoveEffect::Won(win) => {
                assert_eq!(win.mark, Mark::O);
                assert_eq!(win.indices(), [0, 4, 8]);
            }
            other => panic!("expected win, got {other:?}"),
        }
        assert!(application.effect().ends_round());
    }
}
