//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Customer list
    NextRow,
    PrevRow,
    EditSelected,

    // Edit modal
    NextField,
    PrevField,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    Submit,
    CloseModal,

    // Localization
    ToggleLanguage,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, modal_open: bool, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('l') => return Some(UiEvent::ToggleLanguage),
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if modal_open {
        handle_modal_keys(key)
    } else {
        handle_list_keys(key)
    }
}

fn handle_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('l') => Some(UiEvent::ToggleLanguage),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevRow),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextRow),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::EditSelected),
        _ => None,
    }
}

fn handle_modal_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CloseModal),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
