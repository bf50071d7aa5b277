use crate::interactive_ratatui::domain::models::{FetchPayload, PageId};
use std::path::PathBuf;

/// Edits applied to a focused text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    WordLeft,
    WordRight,
    DeleteWordBackward,
    DeleteToStart,
    DeleteToEnd,
}

/// Everything the navigation core reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Global
    Quit,
    ToggleHelp,

    // Navigation keys
    MoveUp,
    MoveDown,
    /// Reserved; no page binds it.
    MoveLeft,
    /// Reserved; no page binds it.
    MoveRight,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    Back,

    // Page-local
    Edit(TextEdit),
    Download,
    Tick,

    // Terminal events
    Resize(u16, u16),

    // Effect completions, routed to the page that asked for them
    FetchSucceeded {
        origin: PageId,
        payload: FetchPayload,
    },
    FetchFailed {
        origin: PageId,
        error: String,
    },
    SequenceSaved {
        origin: PageId,
        path: PathBuf,
        bases: usize,
    },
    SequenceSaveFailed {
        origin: PageId,
        error: String,
    },
}

impl Action {
    /// The page a completion action belongs to, if this is one.
    pub fn origin(&self) -> Option<PageId> {
        match self {
            Action::FetchSucceeded { origin, .. }
            | Action::FetchFailed { origin, .. }
            | Action::SequenceSaved { origin, .. }
            | Action::SequenceSaveFailed { origin, .. } => Some(*origin),
            _ => None,
        }
    }
}
