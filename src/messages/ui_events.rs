//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Category;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Category selector
    SelectCategory(Category),
    NextCategory,
    PrevCategory,

    // Success view
    NextProject,
    PrevProject,

    // Failure view
    Retry,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, is_failure: bool, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    // Help popup swallows every key
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextCategory),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevProject),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextProject),
        KeyCode::Char('r') | KeyCode::Enter if is_failure => Some(UiEvent::Retry),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Category::from_position(d as usize))
            .map(UiEvent::SelectCategory),
        _ => None,
    }
}
