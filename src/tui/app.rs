//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::games::tictactoe::Position;
use crate::session::{SessionError, SessionHandle, SessionReply};
use crate::snapshot::MatchSnapshot;
use crate::view::MatchView;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The app never owns the match: it sends commands to the session and keeps
/// the latest snapshot for drawing.
pub struct App {
    session: SessionHandle,
    view: MatchView,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app from the session's current state.
    #[instrument(skip(session))]
    pub async fn new(session: SessionHandle) -> Result<Self, SessionError> {
        let snapshot = session.snapshot().await?;
        Ok(Self {
            session,
            view: MatchView::from(&snapshot),
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        })
    }

    /// Gets the current view.
    pub fn view(&self) -> &MatchView {
        &self.view
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Short message about the last ignored input, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one user action.
    ///
    /// Disabled controls and non-interactive squares are ignored here, the
    /// same way a disabled button ignores clicks.
    #[instrument(skip(self))]
    pub async fn handle(&mut self, action: Action) -> Result<(), SessionError> {
        self.notice = None;

        match action {
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::SelectCursor => self.select(self.cursor).await?,
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos).await?;
            }
            Action::NextRound => {
                if *self.view.controls().next_round_enabled() {
                    let reply = self.session.next_round(None).await?;
                    self.apply(reply);
                } else {
                    debug!("Next round requested while round in progress");
                    self.notice = Some("Finish the round first".to_string());
                }
            }
            Action::ResetMatch => {
                let reply = self.session.reset_match().await?;
                self.apply(reply);
            }
            Action::ChooseStarter(mark) => {
                let reply = self.session.choose_starter(mark).await?;
                self.apply(reply);
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    async fn select(&mut self, pos: Position) -> Result<(), SessionError> {
        let cell = self.view.cells()[pos.to_index()];
        if !*cell.interactive() {
            debug!(position = %pos, "Square not selectable");
            return Ok(());
        }
        let reply = self.session.play(pos.to_index()).await?;
        self.apply(reply);
        Ok(())
    }

    fn apply(&mut self, reply: SessionReply) {
        if let Some(reason) = reply.rejection() {
            self.notice = Some(reason.to_string());
        }
        self.refresh(reply.snapshot());
    }

    fn refresh(&mut self, snapshot: &MatchSnapshot) {
        self.view = MatchView::from(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Match;
    use crate::games::tictactoe::Mark;
    use crate::session::MatchSession;
    use crossterm::event::KeyCode;

    async fn app() -> App {
        App::new(MatchSession::spawn(Match::new(Mark::X)))
            .await
            .expect("session running")
    }

    #[tokio::test]
    async fn test_select_plays_current_mark() {
        let mut app = app().await;
        app.handle(Action::SelectCursor).await.expect("session running");

        assert_eq!(app.view().status(), "Your move, O");
        assert!(!app.view().cells()[4].interactive());
    }

    #[tokio::test]
    async fn test_next_round_ignored_until_round_finished() {
        let mut app = app().await;
        app.handle(Action::Select(Position::TopLeft))
            .await
            .expect("session running");
        app.handle(Action::NextRound).await.expect("session running");

        assert!(app.notice().is_some());
        assert_eq!(app.view().status(), "Your move, O");
    }

    #[tokio::test]
    async fn test_cursor_and_quit() {
        let mut app = app().await;
        app.handle(Action::MoveCursor(KeyCode::Up))
            .await
            .expect("session running");
        assert_eq!(app.cursor(), Position::TopCenter);

        app.handle(Action::Quit).await.expect("session running");
        assert!(app.should_quit());
    }
}
