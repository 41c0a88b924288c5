use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::domain::{Article, Screen, Session};

/// How long the "Copied!" acknowledgment stays on screen.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// UI-local state wrapped around the [`Session`] state machine: the topic
/// input buffer, list cursor, detail scroll and transient status messages.
pub struct TuiApp {
    pub session: Session,
    pub input: String,
    pub list_index: usize,
    pub list_state: ListState,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    copied_until: Option<Instant>,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            session: Session::new(),
            input: String::new(),
            list_index: 0,
            list_state,
            detail_scroll: 0,
            should_quit: false,
            status_message: None,
            copied_until: None,
        }
    }

    /// The article under the list cursor.
    pub fn article_under_cursor(&self) -> Option<&Article> {
        self.session.articles.get(self.list_index)
    }

    pub fn move_up(&mut self) {
        match self.session.screen {
            Screen::List => {
                if self.list_index > 0 {
                    self.list_index -= 1;
                    self.list_state.select(Some(self.list_index));
                }
            }
            Screen::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            Screen::Home => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.session.screen {
            Screen::List => {
                let articles = &self.session.articles;
                if !articles.is_empty() && self.list_index < articles.len() - 1 {
                    self.list_index += 1;
                    self.list_state.select(Some(self.list_index));
                }
            }
            Screen::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            Screen::Home => {}
        }
    }

    /// Reset the list cursor, e.g. after a fresh generation batch.
    pub fn reset_cursor(&mut self) {
        self.list_index = 0;
        self.list_state.select(Some(0));
        self.detail_scroll = 0;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show the copy acknowledgment; a later copy just restarts the clock.
    pub fn mark_copied(&mut self) {
        self.copied_until = Some(Instant::now() + COPY_FEEDBACK);
    }

    pub fn copy_feedback_active(&self) -> bool {
        self.copied_until.is_some_and(|t| Instant::now() < t)
    }

    /// Housekeeping on each tick: drop the expired copy acknowledgment.
    pub fn tick(&mut self) {
        if self.copied_until.is_some_and(|t| Instant::now() >= t) {
            self.copied_until = None;
        }
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Event;

    fn article(id: &str) -> Article {
        Article {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            content: String::new(),
        }
    }

    fn app_with_articles(n: usize) -> TuiApp {
        let mut app = TuiApp::new();
        app.session.apply(Event::GenerateRequested { topic: None });
        app.session.apply(Event::GenerationSucceeded(
            (0..n).map(|i| article(&format!("a{i}"))).collect(),
        ));
        app
    }

    #[test]
    fn test_list_cursor_bounds() {
        let mut app = app_with_articles(2);
        app.move_up();
        assert_eq!(app.list_index, 0);
        app.move_down();
        assert_eq!(app.list_index, 1);
        app.move_down();
        assert_eq!(app.list_index, 1);
    }

    #[test]
    fn test_cursor_noop_on_empty_list() {
        let mut app = app_with_articles(0);
        app.move_down();
        assert_eq!(app.list_index, 0);
    }

    #[test]
    fn test_detail_scroll_saturates_at_zero() {
        let mut app = app_with_articles(1);
        app.session.apply(Event::ArticleSelected("a0".into()));
        app.move_up();
        assert_eq!(app.detail_scroll, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.detail_scroll, 2);
    }

    #[test]
    fn test_copy_feedback_lifecycle() {
        let mut app = TuiApp::new();
        assert!(!app.copy_feedback_active());
        app.mark_copied();
        assert!(app.copy_feedback_active());
    }
}
