//! Alternating turn invariant: the starter moves first, then marks alternate.

use super::Invariant;
use crate::Match;

/// Invariant: players alternate turns within a round.
///
/// The round's history starts with the starting mark and never repeats a
/// mark twice in a row. While the round is open the current mark is the one
/// due next; once it is over the current mark is whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.mark != game.starting_mark()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected = if game.outcome().is_finished() {
            history.last().map(|m| m.mark)
        } else if history.len() % 2 == 0 {
            Some(game.starting_mark())
        } else {
            Some(game.starting_mark().opponent())
        };

        expected == Some(game.current_mark())
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the starting mark"
    }
}
