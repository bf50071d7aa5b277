use crate::config::Theme;
use crate::entrez::{Record, pretty_print};
use crate::interactive_ratatui::constants::{BANNER_HEIGHT, FOOTER_HEIGHT};
use crate::interactive_ratatui::domain::models::SaveRequest;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::components::scroll_view::ScrollView;
use crate::interactive_ratatui::ui::components::view_layout;
use crate::interactive_ratatui::ui::events::Action;
use crate::interactive_ratatui::ui::pages::PageContext;
use crate::interactive_ratatui::ui::registry::Navigation;
use ratatui::text::{Line, Span};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    None,
    Saving,
    Saved { path: PathBuf, bases: usize },
    Failed(String),
}

/// One fetched record, pretty-printed in a scrollable viewer.
#[derive(Debug, Clone)]
pub struct ResultDetailPage {
    title: String,
    record: Record,
    database: String,
    sequence_path: PathBuf,
    view: ScrollView,
    status: DownloadStatus,
}

/// Rows left for the record text once banner and footer are drawn.
fn body_height(viewport_height: u16) -> u16 {
    viewport_height
        .saturating_sub(BANNER_HEIGHT + FOOTER_HEIGHT)
        .max(1)
}

impl ResultDetailPage {
    pub fn new(
        record: Record,
        database: &str,
        label_padding: usize,
        sequence_path: PathBuf,
    ) -> Self {
        let title = if record.accession.is_empty() {
            record.locus.clone()
        } else {
            record.accession.clone()
        };
        let view = ScrollView::new(&pretty_print(&record, label_padding));

        Self {
            title,
            record,
            database: database.to_string(),
            sequence_path,
            view,
            status: DownloadStatus::None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn scroll_offset(&self) -> usize {
        self.view.offset()
    }

    pub fn status(&self) -> &DownloadStatus {
        &self.status
    }

    pub fn handle(&mut self, action: Action, ctx: &mut PageContext<'_>) -> Command {
        let (width, height) = ctx.viewport();
        let height = body_height(height);

        match action {
            Action::Back => {
                ctx.go_back();
            }
            Action::MoveUp => self.view.scroll_up(1),
            Action::MoveDown => self.view.scroll_down(1, width, height),
            Action::PageUp => self.view.page_up(),
            Action::PageDown => self.view.page_down(width, height),
            Action::Home => self.view.scroll_to_top(),
            Action::End => self.view.scroll_to_bottom(width, height),
            Action::Resize(..) => self.view.clamp(width, height),
            Action::Download => {
                if self.status == DownloadStatus::Saving {
                    return Command::None;
                }
                self.status = DownloadStatus::Saving;
                tracing::info!(accession = %self.title, path = %self.sequence_path.display(), "downloading sequence");
                return Command::SaveSequence(SaveRequest {
                    origin: ctx.id(),
                    database: self.database.clone(),
                    accession: self.title.clone(),
                    path: self.sequence_path.clone(),
                });
            }
            Action::SequenceSaved { path, bases, .. } => {
                self.status = DownloadStatus::Saved { path, bases };
            }
            Action::SequenceSaveFailed { error, .. } => {
                tracing::warn!(accession = %self.title, %error, "sequence download failed");
                self.status = DownloadStatus::Failed(error);
            }
            _ => {}
        }
        Command::None
    }

    pub fn render(&self, nav: &Navigation, theme: &Theme) -> Vec<Line<'static>> {
        let (width, height) = nav.viewport();
        let body = body_height(height);

        let mut lines = view_layout::banner(&self.title, width, theme);
        lines.extend(
            self.view
                .visible_lines(width, body)
                .into_iter()
                .map(Line::from),
        );
        let percent = format!("{}%", self.view.scroll_percent(width, body));
        lines.push(view_layout::footer(&percent, width, theme));

        let status = match &self.status {
            DownloadStatus::None => None,
            DownloadStatus::Saving => Some(Span::styled(
                "Downloading sequence ...".to_string(),
                theme.description,
            )),
            DownloadStatus::Saved { path, bases } => Some(Span::styled(
                format!("✓ Saved {bases} bases to {}", path.display()),
                theme.success,
            )),
            DownloadStatus::Failed(error) => Some(Span::styled(
                format!("Download failed: {error}"),
                theme.error,
            )),
        };
        if let Some(status) = status {
            lines.push(Line::from(status));
        }
        lines
    }
}
