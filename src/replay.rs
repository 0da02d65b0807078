//! Headless replay of a scripted list of moves.

use crate::Match;
use crate::games::tictactoe::{MoveRejection, Position, PositionParseError};
use crate::snapshot::MatchSnapshot;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Play the current mark at a board index.
    Play(usize),
    /// Start the next round.
    NextRound,
}

impl std::str::FromStr for ReplayStep {
    type Err = PositionParseError;

    /// Accepts a raw index (any number, so off-board moves can be scripted),
    /// a position label, or `n` / `next` for the next round.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("n") || token.eq_ignore_ascii_case("next") {
            return Ok(ReplayStep::NextRound);
        }
        if let Ok(index) = token.parse::<usize>() {
            return Ok(ReplayStep::Play(index));
        }
        Position::from_label_or_number(token).map(|pos| ReplayStep::Play(pos.to_index()))
    }
}

/// A move that was ignored during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SkippedStep {
    /// Zero-based step number in the script.
    step: usize,
    /// Why the move was ignored.
    reason: String,
}

/// Result of a replay: final state and any ignored moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ReplayReport {
    snapshot: MatchSnapshot,
    skipped: Vec<SkippedStep>,
}

/// Parses every token into a step.
///
/// # Errors
///
/// Returns the first token that is neither a number, a label, nor `n`.
pub fn parse_steps<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ReplayStep>, PositionParseError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Applies `steps` to `game` in order.
///
/// Ignored moves are collected in the report rather than stopping the replay.
#[instrument(skip(game, steps), fields(steps = steps.len()))]
pub fn replay(game: &mut Match, steps: &[ReplayStep]) -> ReplayReport {
    let mut skipped = Vec::new();

    for (step, action) in steps.iter().enumerate() {
        match *action {
            ReplayStep::Play(index) => {
                if let Err(reason) = game.play(index) {
                    warn!(step, index, %reason, "Scripted move ignored");
                    skipped.push(skip(step, reason));
                }
            }
            ReplayStep::NextRound => {
                let starter = game.start_next_round(None);
                debug!(step, %starter, "Scripted next round");
            }
        }
    }

    ReplayReport {
        snapshot: game.snapshot(),
        skipped,
    }
}

fn skip(step: usize, reason: MoveRejection) -> SkippedStep {
    SkippedStep {
        step,
        reason: reason.to_string(),
    }
}
