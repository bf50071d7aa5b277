use crate::config::Theme;
use crate::interactive_ratatui::ui::events::TextEdit;
use ratatui::text::{Line, Span};

/// Single-line text field with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
    char_limit: Option<usize>,
    placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text and move cursor to the end
    pub fn set_text(&mut self, text: String) {
        self.cursor_position = text.chars().count();
        self.text = text;
    }

    pub fn set_cursor_position(&mut self, position: usize) {
        self.cursor_position = position.min(self.char_count());
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and return if text changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    /// Apply an edit and return true if the text changed
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => {
                if c.is_control() {
                    return false;
                }
                if self.char_limit.is_some_and(|limit| self.char_count() >= limit) {
                    return false;
                }
                let byte_pos = self.byte_offset(self.cursor_position);
                self.text.insert(byte_pos, c);
                self.cursor_position += 1;
                true
            }
            TextEdit::Backspace => {
                if self.cursor_position > 0 {
                    self.delete_range(self.cursor_position - 1, self.cursor_position)
                } else {
                    false
                }
            }
            TextEdit::Delete => self.delete_range(self.cursor_position, self.cursor_position + 1),
            TextEdit::CursorLeft => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            TextEdit::CursorRight => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                false
            }
            TextEdit::CursorHome => {
                self.cursor_position = 0;
                false
            }
            TextEdit::CursorEnd => {
                self.cursor_position = self.char_count();
                false
            }
            TextEdit::WordLeft => {
                self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                false
            }
            TextEdit::WordRight => {
                self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                false
            }
            TextEdit::DeleteWordBackward => {
                let start = self.find_prev_word_boundary(self.cursor_position);
                self.delete_range(start, self.cursor_position)
            }
            TextEdit::DeleteToStart => self.delete_range(0, self.cursor_position),
            TextEdit::DeleteToEnd => {
                let len = self.char_count();
                self.delete_range(self.cursor_position, len)
            }
        }
    }

    /// Render the prompt, text and a block cursor as one line.
    /// Without focus the cursor is not drawn.
    pub fn render_line(&self, theme: &Theme, focused: bool) -> Line<'static> {
        let mut spans = vec![Span::raw("> ")];

        if self.text.is_empty() {
            if focused {
                let mut chars = self.placeholder.chars();
                let first = chars.next().unwrap_or(' ').to_string();
                spans.push(Span::styled(first, theme.cursor));
                spans.push(Span::styled(chars.collect::<String>(), theme.placeholder));
            } else {
                spans.push(Span::styled(self.placeholder.clone(), theme.placeholder));
            }
            return Line::from(spans);
        }

        if !focused {
            spans.push(Span::raw(self.text.clone()));
            return Line::from(spans);
        }

        let before: String = self.text.chars().take(self.cursor_position).collect();
        let mut after = self.text.chars().skip(self.cursor_position);
        let under_cursor = after.next().unwrap_or(' ').to_string();
        let remaining: String = after.collect();

        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        spans.push(Span::styled(under_cursor, theme.cursor));
        if !remaining.is_empty() {
            spans.push(Span::raw(remaining));
        }

        Line::from(spans)
    }
}
