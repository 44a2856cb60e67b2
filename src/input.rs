//! The input vocabulary the state machine consumes, and the key bindings
//! that produce it. The core never sees crossterm types beyond this module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;

/// Everything the state machine can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    MoveUp,
    MoveDown,
    Add,
    Delete,
    Confirm,
    Cancel,
    Char(char),
    // editing inside the focused form field
    Backspace,
    DeleteChar,
    CursorLeft,
    CursorRight,
    Home,
    End,
}

/// Mode-aware key binding: while browsing, letters are commands; while
/// filling, they are text for the focused field.
pub fn map_key(mode: Mode, key: KeyEvent) -> Option<Input> {
    // Ctrl+C quits from anywhere; other Ctrl chords are swallowed so they
    // never leak into a field as text.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            _ => None,
        };
    }

    match mode {
        Mode::Browsing => match key.code {
            KeyCode::Char('q') => Some(Input::Quit),
            KeyCode::Up => Some(Input::MoveUp),
            KeyCode::Down => Some(Input::MoveDown),
            KeyCode::Char('a') => Some(Input::Add),
            KeyCode::Char('d') => Some(Input::Delete),
            _ => None,
        },
        Mode::Filling => match key.code {
            KeyCode::Enter => Some(Input::Confirm),
            KeyCode::Esc => Some(Input::Cancel),
            KeyCode::Backspace => Some(Input::Backspace),
            KeyCode::Delete => Some(Input::DeleteChar),
            KeyCode::Left => Some(Input::CursorLeft),
            KeyCode::Right => Some(Input::CursorRight),
            KeyCode::Home => Some(Input::Home),
            KeyCode::End => Some(Input::End),
            KeyCode::Char(c) => Some(Input::Char(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_commands_while_browsing() {
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Char('a'))), Some(Input::Add));
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Char('d'))), Some(Input::Delete));
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Char('x'))), None);
    }

    #[test]
    fn letters_are_text_while_filling() {
        assert_eq!(
            map_key(Mode::Filling, plain(KeyCode::Char('q'))),
            Some(Input::Char('q'))
        );
        assert_eq!(
            map_key(Mode::Filling, plain(KeyCode::Char('d'))),
            Some(Input::Char('d'))
        );
    }

    #[test]
    fn arrows_move_the_selection_only_while_browsing() {
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Up)), Some(Input::MoveUp));
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Down)), Some(Input::MoveDown));
        // the form is linear: vertical arrows do nothing there
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Up)), None);
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Down)), None);
    }

    #[test]
    fn confirm_and_cancel_are_form_keys() {
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Enter)), Some(Input::Confirm));
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Esc)), Some(Input::Cancel));
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Enter)), None);
        assert_eq!(map_key(Mode::Browsing, plain(KeyCode::Esc)), None);
    }

    #[test]
    fn editing_keys_bind_while_filling() {
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Backspace)), Some(Input::Backspace));
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Delete)), Some(Input::DeleteChar));
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Left)), Some(Input::CursorLeft));
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Right)), Some(Input::CursorRight));
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::Home)), Some(Input::Home));
        assert_eq!(map_key(Mode::Filling, plain(KeyCode::End)), Some(Input::End));
    }

    #[test]
    fn ctrl_c_quits_from_either_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Mode::Browsing, ctrl_c), Some(Input::Quit));
        assert_eq!(map_key(Mode::Filling, ctrl_c), Some(Input::Quit));

        // other Ctrl chords never reach a field as text
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Mode::Filling, ctrl_a), None);
    }
}
