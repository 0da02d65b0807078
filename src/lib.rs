//! Strictly Rounds library - a type-safe tic-tac-toe match engine
//!
//! Two local players alternate marks on a 3x3 grid over a sequence of
//! rounds, with a running scoreboard.
//!
//! # Architecture
//!
//! - **Games**: Pure board rules (move reducer, win and draw evaluation)
//! - **Match**: Round lifecycle, turn tracking and scoring
//! - **Session**: Single-writer task that owns a match
//! - **View**: Presentation state derived from a snapshot
//! - **TUI**: Terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{Mark, Match};
//!
//! let mut game = Match::new(Mark::X);
//! for index in [0, 3, 1, 4, 2] {
//!     game.play(index).expect("legal move");
//! }
//! assert_eq!(game.scoreboard().wins(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod match_state;
mod replay;
mod scoreboard;
mod session;
mod snapshot;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, StrictlyConfig};

// Crate-level exports - Match lifecycle
pub use match_state::Match;
pub use scoreboard::Scoreboard;
pub use snapshot::MatchSnapshot;

// Crate-level exports - Session management
pub use session::{MatchSession, SessionCommand, SessionError, SessionHandle, SessionReply};

// Crate-level exports - Presentation
pub use view::{CellView, Controls, MatchView, status_label};

// Crate-level exports - Replay
pub use replay::{ReplayReport, ReplayStep, SkippedStep, parse_steps, replay};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, action_for, move_cursor, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, Contract, ContractViolation, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation, LegalMove, Line, Mark, MarkBalanceInvariant,
    MatchInvariants, Move, MoveApplication, MoveContract, MoveEffect, MoveRejection, Position,
    PositionParseError, RoundOutcome, RoundPhase, Square, WINNING_LINES, Win, apply_move,
    assert_move_contract, check_winner, is_draw, is_full,
};
