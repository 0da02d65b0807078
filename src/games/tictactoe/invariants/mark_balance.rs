//! Mark balance invariant: the starter is never behind, never two ahead.

use super::Invariant;
use crate::Match;

/// Invariant: the starting mark has placed as many marks as the other, or
/// exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Match> for MarkBalanceInvariant {
    fn holds(game: &Match) -> bool {
        let starter = game.board().count(game.starting_mark());
        let other = game.board().count(game.starting_mark().opponent());
        starter == other || starter == other + 1
    }

    fn description() -> &'static str {
        "Starting mark leads the other by zero or one"
    }
}
