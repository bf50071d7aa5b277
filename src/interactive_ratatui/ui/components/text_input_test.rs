#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crate::config::Theme;
    use crate::interactive_ratatui::ui::events::TextEdit;

    fn line_text(input: &TextInput, focused: bool) -> String {
        input
            .render_line(&Theme::default(), focused)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_text_input_creation() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
        assert!(input.is_empty());
    }

    #[test]
    fn test_set_text() {
        let mut input = TextInput::new();
        input.set_text("hello world".to_string());
        assert_eq!(input.text(), "hello world");
        assert_eq!(input.cursor_position(), 11); // cursor should move to end
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::new();

        assert!(input.apply(TextEdit::Insert('h')));
        assert_eq!(input.text(), "h");
        assert_eq!(input.cursor_position(), 1);

        assert!(input.apply(TextEdit::Insert('i')));
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new();
        input.set_text("insln".to_string());
        input.set_cursor_position(3);

        assert!(input.apply(TextEdit::Insert('u')));
        assert_eq!(input.text(), "insuln");
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new().with_char_limit(3);
        input.apply(TextEdit::Insert('a'));
        input.apply(TextEdit::Insert('b'));
        input.apply(TextEdit::Insert('c'));

        assert!(!input.apply(TextEdit::Insert('d')));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let mut input = TextInput::new();
        assert!(!input.apply(TextEdit::Insert('\n')));
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::new();
        input.set_text("hello".to_string());

        assert!(input.apply(TextEdit::Backspace));
        assert_eq!(input.text(), "hell");
        assert_eq!(input.cursor_position(), 4);

        // Backspace at beginning should not change
        input.set_cursor_position(0);
        assert!(!input.apply(TextEdit::Backspace));
        assert_eq!(input.text(), "hell");
    }

    #[test]
    fn test_delete() {
        let mut input = TextInput::new();
        input.set_text("hello".to_string());
        input.set_cursor_position(0);

        assert!(input.apply(TextEdit::Delete));
        assert_eq!(input.text(), "ello");
        assert_eq!(input.cursor_position(), 0);

        // Delete at end should not change
        input.set_cursor_position(4);
        assert!(!input.apply(TextEdit::Delete));
        assert_eq!(input.text(), "ello");
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::new();
        input.set_text("hello".to_string());

        assert!(!input.apply(TextEdit::CursorLeft));
        assert_eq!(input.cursor_position(), 4);

        input.apply(TextEdit::CursorEnd);
        input.apply(TextEdit::CursorRight);
        assert_eq!(input.cursor_position(), 5);

        input.apply(TextEdit::CursorHome);
        input.apply(TextEdit::CursorLeft);
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_word_movement_and_deletion() {
        let mut input = TextInput::new();
        input.set_text("human insulin receptor".to_string());

        input.apply(TextEdit::WordLeft);
        assert_eq!(input.cursor_position(), 14);
        input.apply(TextEdit::WordLeft);
        assert_eq!(input.cursor_position(), 6);
        input.apply(TextEdit::WordRight);
        assert_eq!(input.cursor_position(), 14);

        input.apply(TextEdit::CursorEnd);
        assert!(input.apply(TextEdit::DeleteWordBackward));
        assert_eq!(input.text(), "human insulin ");
    }

    #[test]
    fn test_delete_to_start_and_end() {
        let mut input = TextInput::new();
        input.set_text("abc def".to_string());
        input.set_cursor_position(3);

        assert!(input.apply(TextEdit::DeleteToEnd));
        assert_eq!(input.text(), "abc");

        assert!(input.apply(TextEdit::DeleteToStart));
        assert_eq!(input.text(), "");
        assert!(!input.apply(TextEdit::DeleteToStart));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.set_text("αβγ".to_string());
        input.set_cursor_position(1);

        assert!(input.apply(TextEdit::Delete));
        assert_eq!(input.text(), "αγ");
        assert!(input.apply(TextEdit::Insert('δ')));
        assert_eq!(input.text(), "αδγ");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_reset() {
        let mut input = TextInput::new();
        input.set_text("query".to_string());
        input.reset();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_render_line() {
        let mut input = TextInput::new().with_placeholder("Text query");
        assert_eq!(line_text(&input, true), "> Text query");
        assert_eq!(line_text(&input, false), "> Text query");

        input.set_text("insulin".to_string());
        // focused adds a trailing block cursor
        assert_eq!(line_text(&input, true), "> insulin ");
        assert_eq!(line_text(&input, false), "> insulin");

        input.set_cursor_position(0);
        assert_eq!(line_text(&input, true), "> insulin");
    }
}
