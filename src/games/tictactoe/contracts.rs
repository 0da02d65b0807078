//! Contract-based validation for tic-tac-toe.
//!
//! Preconditions gate [`apply_move`](super::apply_move); postconditions check
//! that a [`Match`] transition kept the system invariants.

use super::action::MoveRejection;
use super::invariants::{InvariantSet, MatchInvariants};
use super::rules::Win;
use super::{Board, Position};
use crate::Match;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a square.
pub struct IndexOnBoard;

impl IndexOnBoard {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveRejection> {
        Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))
    }
}

/// Precondition: the round has no winner yet.
pub struct RoundOpen;

impl RoundOpen {
    /// Fails if a winner is already known.
    pub fn check(existing_winner: Option<&Win>) -> Result<(), MoveRejection> {
        match existing_winner {
            Some(_) => Err(MoveRejection::RoundOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the position is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if the square already holds a mark.
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveRejection> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if it lands on an empty square
/// of a round nobody has won.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(board, existing_winner))]
    pub fn check(
        board: &Board,
        index: usize,
        existing_winner: Option<&Win>,
    ) -> Result<Position, MoveRejection> {
        let pos = IndexOnBoard::check(index)?;
        RoundOpen::check(existing_winner)?;
        SquareIsEmpty::check(board, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Postconditions
// ─────────────────────────────────────────────────────────────

/// A failed postcondition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Postcondition failed: {}", _0)]
pub struct ContractViolation(#[error(not(source))] pub String);

/// Postconditions over a state transition `before -> after`.
pub trait Contract<S> {
    /// Checks that the transition preserved system invariants.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// Contract for a move on a [`Match`].
///
/// - All match invariants hold afterwards
/// - At most one round was scored, and no counter went down
pub struct MoveContract;

impl Contract<Match> for MoveContract {
    fn post(before: &Match, after: &Match) -> Result<(), ContractViolation> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation(descriptions)
        })?;

        let (b, a) = (before.scoreboard(), after.scoreboard());
        let monotonic =
            a.x_wins() >= b.x_wins() && a.o_wins() >= b.o_wins() && a.draws() >= b.draws();
        let scored = a.rounds_played().saturating_sub(b.rounds_played());
        if !monotonic || scored > 1 {
            warn!(?b, ?a, "Scoreboard changed by more than one round");
            return Err(ContractViolation(
                "a move scores at most one round".to_string(),
            ));
        }
        Ok(())
    }
}

/// Checks the move contract, panicking in debug builds on violation.
#[instrument(skip_all)]
pub fn assert_move_contract(before: &Match, after: &Match) {
    let result = MoveContract::post(before, after);
    if let Err(violation) = &result {
        warn!(%violation, "Move contract violated");
    }
    debug_assert!(result.is_ok(), "Move contract violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Square};

    #[test]
    fn test_precondition_empty_square() {
        let board = Board::new();
        assert_eq!(LegalMove::check(&board, 4, None), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board = Board::new().with(Position::Center, Mark::X);
        assert_eq!(
            LegalMove::check(&board, 4, None),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_bounds_checked_before_round_state() {
        let win = Win::new(
            Mark::X,
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(
            LegalMove::check(&Board::new(), 42, Some(&win)),
            Err(MoveRejection::OutOfBounds(42))
        );
        assert_eq!(
            LegalMove::check(&Board::new(), 4, Some(&win)),
            Err(MoveRejection::RoundOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Match::new(Mark::X);
        let mut after = before.clone();
        after.play(4).expect("legal move");

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Match::new(Mark::X);
        let mut after = before.clone();
        after.play(4).expect("legal move");

        // Second mark appears without a turn being taken.
        after.board_mut().set(Position::TopLeft, Square::Occupied(Mark::X));

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
