use crate::config::Theme;
use crate::interactive_ratatui::ui::keymap::HelpEntry;
use ratatui::text::{Line, Span};

const COLUMN_SEPARATOR: &str = "    ";

/// Key legend laid out as side-by-side columns.
pub struct HelpLegend<'a> {
    columns: &'a [Vec<HelpEntry>],
}

impl<'a> HelpLegend<'a> {
    pub fn new(columns: &'a [Vec<HelpEntry>]) -> Self {
        Self { columns }
    }

    pub fn height(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn render(&self, theme: &Theme) -> Vec<Line<'static>> {
        let widths: Vec<(usize, usize)> = self
            .columns
            .iter()
            .map(|column| {
                let keys = column.iter().map(|e| e.keys.chars().count()).max();
                let descs = column.iter().map(|e| e.description.chars().count()).max();
                (keys.unwrap_or(0), descs.unwrap_or(0))
            })
            .collect();

        (0..self.height())
            .map(|row| {
                let mut spans = Vec::new();
                for (index, column) in self.columns.iter().enumerate() {
                    let (key_width, desc_width) = widths[index];
                    if index > 0 {
                        spans.push(Span::raw(COLUMN_SEPARATOR));
                    }
                    match column.get(row) {
                        Some(entry) => {
                            spans.push(Span::styled(
                                format!("{:<key_width$}", entry.keys),
                                theme.help_key,
                            ));
                            spans.push(Span::raw(" "));
                            spans.push(Span::styled(
                                format!("{:<desc_width$}", entry.description),
                                theme.help_description,
                            ));
                        }
                        None => spans.push(Span::raw(" ".repeat(key_width + 1 + desc_width))),
                    }
                }
                Line::from(spans)
            })
            .collect()
    }
}
