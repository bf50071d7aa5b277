use super::list_item::{ListItem, truncate_message};
use crate::config::Theme;
use crate::interactive_ratatui::constants::{LIST_ITEM_HEIGHT, PAGE_SIZE};
use ratatui::text::{Line, Span};

/// Rows used by the list title and its spacer
const LIST_HEADER_HEIGHT: u16 = 2;
/// Row used by the position indicator
const LIST_FOOTER_HEIGHT: u16 = 1;

/// Selectable, scrolling list of two-row entries.
#[derive(Debug, Clone)]
pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title: String::new(),
            empty_message: String::new(),
        }
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            title,
            empty_message,
            ..Self::default()
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn clear(&mut self) {
        self.set_items(Vec::new());
        self.title.clear();
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    /// Index of the highlighted item, `None` when the list is empty
    pub fn selected(&self) -> Option<usize> {
        (self.selected_index < self.items.len()).then_some(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        if self.selected_index < last_index {
            self.selected_index = last_index;
            true
        } else {
            false
        }
    }

    /// How many entries fit in `height` rows (at least one)
    pub fn visible_count(height: u16) -> usize {
        let body = height.saturating_sub(LIST_HEADER_HEIGHT + LIST_FOOTER_HEIGHT);
        usize::from((body / LIST_ITEM_HEIGHT).max(1))
    }

    /// First visible entry for `height` rows. Starts from the stored offset
    /// and moves only as far as needed to keep the selection on screen.
    pub fn window_start(&self, height: u16) -> usize {
        let visible_count = Self::visible_count(height);
        let mut start = self.scroll_offset;
        if self.selected_index < start {
            start = self.selected_index;
        } else if self.selected_index >= start + visible_count {
            start = self.selected_index + 1 - visible_count;
        }
        start.min(self.items.len().saturating_sub(visible_count))
    }

    /// Keep the selection inside the window of `height` rows
    pub fn adjust_scroll_offset(&mut self, height: u16) {
        self.scroll_offset = self.window_start(height);
    }

    pub fn render(&self, width: u16, height: u16, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(format!(" {} ", self.title), theme.list_title)),
            Line::from(""),
        ];

        if self.items.is_empty() {
            lines.push(Line::from(Span::styled(
                self.empty_message.clone(),
                theme.item_description,
            )));
            return lines;
        }

        let text_width = usize::from(width.saturating_sub(2));
        let visible_count = Self::visible_count(height);
        // The stored offset may predate a resize made while another page was current
        let start = self.window_start(height);
        let end = (start + visible_count).min(self.items.len());

        for (index, item) in self.items[start..end].iter().enumerate() {
            let is_selected = start + index == self.selected_index;
            let (gutter, title_style, description_style) = if is_selected {
                (
                    "│ ",
                    theme.selected_item_title,
                    theme.selected_item_description,
                )
            } else {
                ("  ", theme.item_title, theme.item_description)
            };

            lines.push(Line::from(vec![
                Span::styled(gutter, title_style),
                Span::styled(truncate_message(item.title(), text_width), title_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled(gutter, description_style),
                Span::styled(
                    truncate_message(item.description(), text_width),
                    description_style,
                ),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("  {}/{}", self.selected_index + 1, self.items.len()),
            theme.item_description,
        )));

        lines
    }
}
