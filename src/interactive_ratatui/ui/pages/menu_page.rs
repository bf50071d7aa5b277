use crate::config::Theme;
use crate::interactive_ratatui::domain::models::PageId;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::components::view_layout;
use crate::interactive_ratatui::ui::events::Action;
use crate::interactive_ratatui::ui::pages::PageContext;
use ratatui::text::{Line, Span};

/// Static list of labelled destinations.
#[derive(Debug, Clone)]
pub struct MenuPage {
    title: String,
    description: String,
    options: Vec<(String, PageId)>,
    cursor: usize,
}

impl MenuPage {
    pub fn new(title: &str, description: &str, options: Vec<(String, PageId)>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            options,
            cursor: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &[(String, PageId)] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<PageId> {
        self.options.get(self.cursor).map(|(_, id)| *id)
    }

    fn last_index(&self) -> usize {
        self.options.len().saturating_sub(1)
    }

    pub fn handle(&mut self, action: Action, ctx: &mut PageContext<'_>) -> Command {
        match action {
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => self.cursor = (self.cursor + 1).min(self.last_index()),
            Action::Home => self.cursor = 0,
            Action::End => self.cursor = self.last_index(),
            Action::Select => {
                if let Some(target) = self.selected() {
                    tracing::debug!(from = %ctx.id(), to = %target, "menu selection");
                    ctx.navigate_to(target, &self.title);
                }
            }
            Action::Back => {
                ctx.go_back();
            }
            // MoveLeft/MoveRight are reserved.
            _ => {}
        }
        Command::None
    }

    pub fn render(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if !self.description.is_empty() {
            lines.push(Line::from(Span::styled(
                self.description.clone(),
                theme.description,
            )));
            lines.push(Line::from(""));
        }

        let card_width = self
            .options
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0)
            + 2;

        for (index, (label, _)) in self.options.iter().enumerate() {
            let label = format!(" {label} ");
            lines.extend(view_layout::card(
                &label,
                card_width,
                index == self.cursor,
                theme,
            ));
        }
        lines.push(Line::from(""));
        lines
    }
}
