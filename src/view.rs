//! Presentation model for a match.
//!
//! Front ends render a [`MatchView`] rather than poking at match state, so
//! what is clickable, highlighted or enabled is decided in one place.

use crate::games::tictactoe::{Mark, Position, RoundOutcome, Square};
use crate::scoreboard::Scoreboard;
use crate::snapshot::MatchSnapshot;
use derive_getters::Getters;

/// Status text for a round.
pub fn status_label(outcome: &RoundOutcome, current: Mark) -> String {
    match outcome {
        RoundOutcome::Won(win) => format!("{} takes the round!", win.mark),
        RoundOutcome::Draw => "It's a draw.".to_string(),
        RoundOutcome::InProgress => format!("Your move, {current}"),
    }
}

/// One square as the front end should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct CellView {
    /// Where the square sits on the board.
    position: Position,
    /// What the square holds.
    square: Square,
    /// Selecting this square would place a mark.
    interactive: bool,
    /// Part of the winning line.
    highlighted: bool,
}

/// State of the three match controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Controls {
    /// "Next round" is only offered once the round is over.
    next_round_enabled: bool,
    /// "Reset match" is always offered.
    reset_enabled: bool,
    /// Currently selected starting mark.
    starter: Mark,
}

/// The whole screen: status, board, scores and controls.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchView {
    status: String,
    cells: [CellView; 9],
    scoreboard: Scoreboard,
    controls: Controls,
}

impl From<&MatchSnapshot> for MatchView {
    fn from(snapshot: &MatchSnapshot) -> Self {
        let finished = snapshot.is_round_finished();
        let line = snapshot.winning_line().unwrap_or_default();
        let won = snapshot.winning_line().is_some();

        let cells = Position::ALL.map(|position| {
            let square = Square::from(snapshot.cells()[position.to_index()]);
            CellView {
                position,
                square,
                interactive: !finished && square == Square::Empty,
                highlighted: won && line.contains(&position.to_index()),
            }
        });

        Self {
            status: snapshot.status().clone(),
            cells,
            scoreboard: *snapshot.scoreboard(),
            controls: Controls {
                next_round_enabled: finished,
                reset_enabled: true,
                starter: *snapshot.starting_mark(),
            },
        }
    }
}

impl MatchView {
    /// Plain-text rendering: status, grid and scores.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.status);
        for row in self.cells.chunks(3) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell.square.mark() {
                    Some(mark) if cell.highlighted => format!("[{mark}]"),
                    Some(mark) => format!(" {mark} "),
                    None => format!(" {} ", cell.position.to_index() + 1),
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.scoreboard.to_string());
        out
    }
}
