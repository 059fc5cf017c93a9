use crossterm::event::{KeyCode, KeyModifiers};

/// Commands available in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollDown,
    ScrollUp,
    Quit,
    /// Hunt once, insert before the target.
    InsertBefore,
    /// Hunt once, insert after the target.
    InsertAfter,
    Write,
    /// Hunt twice, delete the inclusive range.
    Delete,
    /// Hunt twice, delete the range and insert in its place.
    Change,
    Reload,
    GotoLine,
}

/// What a key does while inserting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAction {
    Leave,
    Backspace,
    Insert(u8),
    Ignore,
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

/// Resolve a normal-mode key to its command.
pub fn normal_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('d') => Some(Action::ScrollDown),
            KeyCode::Char('u') => Some(Action::ScrollUp),
            _ => None,
        };
    }

    match code {
        KeyCode::Down | KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Up | KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::Char(c) if is_plain(modifiers) => match c {
            'j' => Some(Action::ScrollDown),
            'k' => Some(Action::ScrollUp),
            'q' => Some(Action::Quit),
            'i' => Some(Action::InsertBefore),
            'a' => Some(Action::InsertAfter),
            'w' => Some(Action::Write),
            'd' => Some(Action::Delete),
            'c' => Some(Action::Change),
            'r' => Some(Action::Reload),
            'g' => Some(Action::GotoLine),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve a key pressed in insert mode.
pub fn insert_action(code: KeyCode, modifiers: KeyModifiers) -> InsertAction {
    match code {
        KeyCode::Char('d') | KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            InsertAction::Leave
        }
        KeyCode::Esc => InsertAction::Leave,
        KeyCode::Backspace => InsertAction::Backspace,
        _ => match key_byte(code, modifiers) {
            Some(byte) => InsertAction::Insert(byte),
            None => InsertAction::Ignore,
        },
    }
}

/// The document byte a key stands for, if any.
///
/// Printable ASCII maps to itself, Enter to a line feed and Tab to a tab.
/// Everything else (control chords, navigation keys, non-ASCII) carries no
/// byte.
pub fn key_byte(code: KeyCode, modifiers: KeyModifiers) -> Option<u8> {
    if modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Some(c as u8),
        KeyCode::Enter => Some(b'\n'),
        KeyCode::Tab => Some(b'\t'),
        _ => None,
    }
}
