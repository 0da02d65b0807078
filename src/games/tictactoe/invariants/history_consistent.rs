//! History consistency invariant: replaying the round's moves rebuilds the board.

use super::Invariant;
use crate::Match;
use crate::games::tictactoe::Board;

/// Invariant: squares are only ever filled by recorded moves.
///
/// Replaying the history onto an empty board must place every mark on an
/// empty square and end with exactly the current board.
pub struct HistoryConsistentInvariant;

impl Invariant<Match> for HistoryConsistentInvariant {
    fn holds(game: &Match) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed = reconstructed.with(mov.position, mov.mark);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the round's move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position, Square};

    #[test]
    fn test_holds_after_moves() {
        let mut game = Match::new(Mark::X);
        for index in [0, 4, 8] {
            game.play(index).expect("legal move");
        }
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_square_violates() {
        let mut game = Match::new(Mark::X);
        game.board_mut().set(Position::Center, Square::Occupied(Mark::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_next_round_clears_history() {
        let mut game = Match::new(Mark::X);
        game.play(0).expect("legal move");
        game.start_next_round(None);

        assert!(game.history().is_empty());
        assert!(HistoryConsistentInvariant::holds(&game));
    }
}
