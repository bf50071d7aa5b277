use crate::entrez::ResultSummary;

/// Trait for items that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// First row of the entry
    fn title(&self) -> &str;

    /// Second, dimmed row of the entry
    fn description(&self) -> &str;
}

impl ListItem for ResultSummary {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Cut `text` to at most `max_width` chars, ending with an ellipsis when cut.
pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= max_width {
        return text;
    }
    if max_width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max_width - 1).collect();
    cut.push('…');
    cut
}
