//! Key bindings and cursor movement.

use crate::games::tictactoe::{Mark, Position};
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Select the square under the cursor.
    SelectCursor,
    /// Select a square directly (keys 1-9).
    Select(Position),
    /// Advance to the next round.
    NextRound,
    /// Reset scores and starter.
    ResetMatch,
    /// Choose who starts.
    ChooseStarter(Mark),
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, if it is bound.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Select),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NextRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ResetMatch),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Action::ChooseStarter(Mark::X)),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::ChooseStarter(Mark::O)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Select(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Select(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
        assert_eq!(action_for(KeyCode::Char('o')), Some(Action::ChooseStarter(Mark::O)));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::SelectCursor));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
    }
}
