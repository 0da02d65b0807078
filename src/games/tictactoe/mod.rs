//! Tic-tac-toe rules: board, marks, win evaluation and move application.

mod action;
mod contracts;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveApplication, MoveEffect, MoveRejection, apply_move};
pub use contracts::{
    Contract, ContractViolation, LegalMove, MoveContract, assert_move_contract,
};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MarkBalanceInvariant, MatchInvariants,
};
pub use outcome::{RoundOutcome, RoundPhase};
pub use position::{Position, PositionParseError};
pub use rules::{Line, WINNING_LINES, Win, check_winner, is_draw, is_full};
pub use types::{Board, Mark, Square};
