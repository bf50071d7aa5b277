use crate::interactive_ratatui::domain::models::InputMode;
use crate::interactive_ratatui::ui::events::{Action, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One row of the help legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn entry(keys: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry { keys, description }
}

/// Decodes terminal key events into [`Action`]s.
///
/// Decoding depends on the active page's [`InputMode`]: while a text field
/// has focus, printable keys are text edits and only Esc, Ctrl+C and F1 keep
/// their global meaning.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyMap;

impl KeyMap {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, key: KeyEvent, mode: InputMode) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        // Global keys
        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::F(1) => return Some(Action::ToggleHelp),
            KeyCode::Enter => return Some(Action::Select),
            KeyCode::Backspace if !ctrl && !alt => return Some(Action::Back),
            KeyCode::Up => return Some(Action::MoveUp),
            KeyCode::Down => return Some(Action::MoveDown),
            KeyCode::PageUp => return Some(Action::PageUp),
            KeyCode::PageDown => return Some(Action::PageDown),
            _ => {}
        }

        match mode {
            InputMode::Navigation => Self::decode_navigation(key, ctrl),
            InputMode::TextEntry => Self::decode_text_entry(key, ctrl, alt),
        }
    }

    fn decode_navigation(key: KeyEvent, ctrl: bool) -> Option<Action> {
        match key.code {
            KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
            KeyCode::Char('u') if ctrl => Some(Action::PageUp),
            KeyCode::Char('d') if ctrl => Some(Action::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Home),
            KeyCode::End | KeyCode::Char('G') => Some(Action::End),
            KeyCode::Char('d') => Some(Action::Download),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn decode_text_entry(key: KeyEvent, ctrl: bool, alt: bool) -> Option<Action> {
        let edit = match key.code {
            KeyCode::Char('a') if ctrl => TextEdit::CursorHome,
            KeyCode::Char('e') if ctrl => TextEdit::CursorEnd,
            KeyCode::Char('b') if ctrl => TextEdit::CursorLeft,
            KeyCode::Char('f') if ctrl => TextEdit::CursorRight,
            KeyCode::Char('h') if ctrl => TextEdit::Backspace,
            KeyCode::Char('d') if ctrl => TextEdit::Delete,
            KeyCode::Char('w') if ctrl => TextEdit::DeleteWordBackward,
            KeyCode::Char('u') if ctrl => TextEdit::DeleteToStart,
            KeyCode::Char('k') if ctrl => TextEdit::DeleteToEnd,
            KeyCode::Char('b') if alt => TextEdit::WordLeft,
            KeyCode::Char('f') if alt => TextEdit::WordRight,
            KeyCode::Backspace if ctrl || alt => TextEdit::DeleteWordBackward,
            KeyCode::Left if ctrl || alt => TextEdit::WordLeft,
            KeyCode::Right if ctrl || alt => TextEdit::WordRight,
            KeyCode::Left => TextEdit::CursorLeft,
            KeyCode::Right => TextEdit::CursorRight,
            KeyCode::Home => TextEdit::CursorHome,
            KeyCode::End => TextEdit::CursorEnd,
            KeyCode::Delete => TextEdit::Delete,
            KeyCode::Char(c) if !ctrl && !alt => TextEdit::Insert(c),
            _ => return None,
        };
        Some(Action::Edit(edit))
    }

    /// Legend columns, rendered side by side.
    pub fn help_columns(&self) -> Vec<Vec<HelpEntry>> {
        vec![
            vec![entry("↑/k", "move up"), entry("↓/j", "move down")],
            vec![entry("←/h", "move left"), entry("→/l", "move right")],
            vec![entry("bksp", "previous page"), entry("enter", "select")],
            vec![entry("pgup/pgdn", "scroll page"), entry("d", "download sequence")],
            vec![entry("?/F1", "toggle help"), entry("esc/ctrl-c", "quit")],
        ]
    }
}
