use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::Result;
use crate::domain::{EditAction, Screen};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                return Ok(AppEvent::Key(key));
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    Select,
    Back,
    GenerateTopic,
    GenerateRandom,
    InputChar(char),
    InputBackspace,
    Edit(EditAction),
    SaveFile,
    Copy,
    None,
}

/// Map a key event to an action for the active screen.
///
/// The home screen owns free text input, so most plain characters go into
/// the topic buffer there; list and detail use single-key commands.
pub fn action_for(screen: Screen, key: &KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match screen {
        Screen::Home => match key.code {
            KeyCode::Enter => Action::GenerateTopic,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::GenerateRandom
            }
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::InputChar(c)
            }
            _ => Action::None,
        },
        Screen::List => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Enter => Action::Select,
            KeyCode::Esc | KeyCode::Backspace => Action::Back,
            _ => Action::None,
        },
        Screen::Detail => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('s') => Action::Edit(EditAction::Summarize),
            KeyCode::Char('e') => Action::Edit(EditAction::Expand),
            KeyCode::Char('r') => Action::Edit(EditAction::Rephrase),
            KeyCode::Char('g') => Action::Edit(EditAction::FixGrammar),
            KeyCode::Char('w') => Action::SaveFile,
            KeyCode::Char('y') => Action::Copy,
            KeyCode::Esc | KeyCode::Backspace => Action::Back,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_home_captures_plain_chars() {
        assert_eq!(
            action_for(Screen::Home, &key(KeyCode::Char('r'))),
            Action::InputChar('r')
        );
        assert_eq!(
            action_for(Screen::Home, &key(KeyCode::Enter)),
            Action::GenerateTopic
        );
    }

    #[test]
    fn test_home_ctrl_r_generates_random() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(action_for(Screen::Home, &key), Action::GenerateRandom);
    }

    #[test]
    fn test_detail_edit_keys() {
        assert_eq!(
            action_for(Screen::Detail, &key(KeyCode::Char('s'))),
            Action::Edit(EditAction::Summarize)
        );
        assert_eq!(
            action_for(Screen::Detail, &key(KeyCode::Char('g'))),
            Action::Edit(EditAction::FixGrammar)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for screen in [Screen::Home, Screen::List, Screen::Detail] {
            assert_eq!(action_for(screen, &key), Action::Quit);
        }
    }
}
