use tracing::error;

use crate::domain::{Article, EditAction};

/// The screen the user is currently on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    List,
    Detail,
}

/// Something the session wants done outside the state machine. The caller
/// performs it and feeds the outcome back in as a completion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Generate { topic: Option<String> },
    Edit { content: String, action: EditAction },
}

/// Inputs to [`Session::apply`]: user intents and service-call outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    GenerateRequested { topic: Option<String> },
    GenerationSucceeded(Vec<Article>),
    GenerationFailed(String),
    ArticleSelected(String),
    EditRequested(EditAction),
    EditSucceeded { id: String, content: String },
    EditFailed(String),
    Back,
}

/// Session-scoped application state.
///
/// All mutation goes through [`apply`](Session::apply), which makes the
/// transition table unit-testable without any rendering surface.
#[derive(Debug, Clone)]
pub struct Session {
    pub screen: Screen,
    pub articles: Vec<Article>,
    pub selected: Option<Article>,
    pub is_loading: bool,
    pub is_editing: bool,
    pub error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            articles: Vec::new(),
            selected: None,
            is_loading: false,
            is_editing: false,
            error: None,
        }
    }

    /// Apply one event, returning the effect to perform, if any.
    ///
    /// User-driven events are ignored while a generation request is in
    /// flight. Completion events for requests that are no longer pending
    /// (or whose selection has changed underneath them) are dropped.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::GenerateRequested { topic } => {
                if self.screen != Screen::Home || self.is_loading {
                    return None;
                }
                self.is_loading = true;
                self.error = None;
                Some(Effect::Generate { topic })
            }
            Event::GenerationSucceeded(articles) => {
                if !self.is_loading {
                    return None;
                }
                self.is_loading = false;
                self.articles = articles;
                self.error = None;
                self.screen = Screen::List;
                None
            }
            Event::GenerationFailed(message) => {
                if !self.is_loading {
                    return None;
                }
                self.is_loading = false;
                self.error = Some(message);
                None
            }
            Event::ArticleSelected(id) => {
                if self.screen != Screen::List || self.is_loading {
                    return None;
                }
                // Guard: the id must belong to the current batch.
                let Some(article) = self.articles.iter().find(|a| a.id == id) else {
                    return None;
                };
                self.selected = Some(article.clone());
                self.error = None;
                self.screen = Screen::Detail;
                None
            }
            Event::EditRequested(action) => {
                if self.screen != Screen::Detail || self.is_editing || self.is_loading {
                    return None;
                }
                let content = self.selected.as_ref()?.content.clone();
                self.is_editing = true;
                Some(Effect::Edit { content, action })
            }
            Event::EditSucceeded { id, content } => {
                if !self.is_editing {
                    return None;
                }
                self.is_editing = false;
                // Stale guard: the response must still match the selection.
                match &mut self.selected {
                    Some(selected) if selected.id == id => {
                        selected.content = content.clone();
                    }
                    _ => return None,
                }
                if let Some(entry) = self.articles.iter_mut().find(|a| a.id == id) {
                    entry.content = content;
                }
                None
            }
            Event::EditFailed(message) => {
                if !self.is_editing {
                    return None;
                }
                self.is_editing = false;
                // Diagnostic only; the previous content stays on screen.
                error!("edit failed: {message}");
                None
            }
            Event::Back => {
                if self.is_loading {
                    return None;
                }
                match self.screen {
                    Screen::Detail => {
                        self.selected = None;
                        self.screen = Screen::List;
                    }
                    Screen::List => {
                        self.articles.clear();
                        self.screen = Screen::Home;
                    }
                    Screen::Home => {}
                }
                None
            }
        }
    }

    /// Detail with no selection is not a renderable screen; fall back to the
    /// list if out-of-band manipulation ever produces it.
    pub fn repair(&mut self) {
        if self.screen == Screen::Detail && self.selected.is_none() {
            self.screen = Screen::List;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
