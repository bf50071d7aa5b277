use crate::config::Theme;
use crate::entrez::{Record, ResultSummary};
use crate::interactive_ratatui::constants::{QUERY_CHAR_LIMIT, QUERY_PLACEHOLDER};
use crate::interactive_ratatui::domain::models::{FetchPayload, FetchRequest, InputMode, PageId};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::components::list_viewer::ListViewer;
use crate::interactive_ratatui::ui::components::spinner::Spinner;
use crate::interactive_ratatui::ui::components::text_input::TextInput;
use crate::interactive_ratatui::ui::events::{Action, TextEdit};
use crate::interactive_ratatui::ui::pages::{PageContext, ResultDetailPage};
use crate::interactive_ratatui::ui::registry::Navigation;
use ratatui::text::{Line, Span};
use std::path::PathBuf;

/// Lifecycle of a submitted query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// Input is editable; nothing pending.
    Idle,
    /// A fetch is in flight; input is frozen.
    Loading,
    /// Results are listed.
    Received,
}

/// Per-page settings resolved from the runtime configuration.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub database: String,
    /// End the session on a failed fetch instead of returning to `Idle`.
    pub fatal_fetch_errors: bool,
    pub label_padding: usize,
    pub sequence_path: PathBuf,
}

/// Text query against one Entrez filter, listing what comes back.
#[derive(Debug, Clone)]
pub struct SearchPage {
    title: String,
    description: String,
    filter: String,
    settings: SearchSettings,
    input: TextInput,
    phase: SearchPhase,
    spinner: Spinner,
    results: ListViewer<ResultSummary>,
    records: Vec<Record>,
    result_pages: Vec<PageId>,
    query: String,
    error: Option<String>,
}

impl SearchPage {
    pub fn new(title: &str, description: &str, filter: &str, settings: SearchSettings) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            filter: filter.to_string(),
            settings,
            input: TextInput::new()
                .with_char_limit(QUERY_CHAR_LIMIT)
                .with_placeholder(QUERY_PLACEHOLDER),
            phase: SearchPhase::Idle,
            spinner: Spinner::new(),
            results: ListViewer::new(String::new(), "No results found".to_string()),
            records: Vec::new(),
            result_pages: Vec::new(),
            query: String::new(),
            error: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn database(&self) -> &str {
        &self.settings.database
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn results(&self) -> &ListViewer<ResultSummary> {
        &self.results
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Pages registered for the current result list, by position.
    pub fn result_pages(&self) -> &[PageId] {
        &self.result_pages
    }

    /// Query as normalized by the search service.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn input_mode(&self) -> InputMode {
        match self.phase {
            SearchPhase::Idle => InputMode::TextEntry,
            SearchPhase::Loading | SearchPhase::Received => InputMode::Navigation,
        }
    }

    pub fn handle(&mut self, action: Action, ctx: &mut PageContext<'_>) -> Command {
        match action {
            Action::FetchSucceeded { payload, .. } => {
                self.receive(payload, ctx);
                Command::None
            }
            Action::FetchFailed { error, .. } => self.fail(error),
            Action::Select => self.select(ctx),
            Action::Back => {
                match self.phase {
                    SearchPhase::Idle if !self.input.is_empty() => {
                        self.input.apply(TextEdit::Backspace);
                    }
                    SearchPhase::Idle | SearchPhase::Loading => {
                        ctx.go_back();
                    }
                    SearchPhase::Received => self.reset(),
                }
                Command::None
            }
            Action::Edit(edit) if self.phase == SearchPhase::Idle => {
                self.input.apply(edit);
                Command::None
            }
            Action::Tick if self.phase == SearchPhase::Loading => {
                self.spinner.tick();
                Command::None
            }
            action if self.phase == SearchPhase::Received => {
                self.navigate_results(action, ctx.viewport().1);
                Command::None
            }
            _ => Command::None,
        }
    }

    fn select(&mut self, ctx: &mut PageContext<'_>) -> Command {
        match self.phase {
            SearchPhase::Idle => {
                let query = self.input.text().trim();
                if query.is_empty() {
                    return Command::None;
                }
                let request = FetchRequest {
                    origin: ctx.id(),
                    database: self.settings.database.clone(),
                    filter: self.filter.clone(),
                    query: query.to_string(),
                };
                tracing::info!(
                    page = %ctx.id(),
                    database = %request.database,
                    filter = %request.filter,
                    query = %request.query,
                    "submitting search"
                );
                self.phase = SearchPhase::Loading;
                self.error = None;
                self.spinner.reset();
                Command::Fetch(request)
            }
            SearchPhase::Loading => Command::None,
            SearchPhase::Received => {
                let target = self
                    .results
                    .selected()
                    .and_then(|index| self.result_pages.get(index).copied());
                if let Some(target) = target {
                    ctx.hide_help();
                    ctx.navigate_to(target, &self.title);
                }
                Command::None
            }
        }
    }

    fn navigate_results(&mut self, action: Action, height: u16) {
        match action {
            Action::MoveUp => {
                self.results.move_up();
            }
            Action::MoveDown => {
                self.results.move_down();
            }
            Action::PageUp => {
                self.results.page_up();
            }
            Action::PageDown => {
                self.results.page_down();
            }
            Action::Home => {
                self.results.move_to_start();
            }
            Action::End => {
                self.results.move_to_end();
            }
            Action::Resize(..) => {}
            _ => return,
        }
        self.results.adjust_scroll_offset(height);
    }

    fn receive(&mut self, payload: FetchPayload, ctx: &mut PageContext<'_>) {
        let FetchPayload {
            ids,
            query_translation,
            records,
        } = payload;

        // efetch answers in request order, but only a complete answer lines up
        // position for position with the esearch ids
        let aligned = ids.len() == records.len();
        let mut summaries = Vec::with_capacity(records.len());
        let mut pages = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let id = ctx.allocate_result_id();
            let fallback_uid = if aligned { ids.get(index) } else { None };
            summaries.push(record.summary(fallback_uid.map(String::as_str)));
            ctx.register(
                id,
                ResultDetailPage::new(
                    record.clone(),
                    &self.settings.database,
                    self.settings.label_padding,
                    self.settings.sequence_path.clone(),
                ),
            );
            pages.push(id);
        }

        self.query = if query_translation.trim().is_empty() {
            self.input.text().trim().to_string()
        } else {
            query_translation
        };
        tracing::info!(
            page = %ctx.id(),
            records = records.len(),
            query = %self.query,
            "search results received"
        );

        self.results.set_title(self.query.clone());
        self.results.set_items(summaries);
        self.results.adjust_scroll_offset(ctx.viewport().1);
        self.records = records;
        self.result_pages = pages;
        self.phase = SearchPhase::Received;
        self.error = None;

        if ctx.is_current() {
            ctx.hide_help();
        }
    }

    fn fail(&mut self, error: String) -> Command {
        tracing::warn!(title = %self.title, %error, "search failed");
        if self.settings.fatal_fetch_errors {
            return Command::Abort(format!("error searching or fetching in Entrez: {error}"));
        }
        self.phase = SearchPhase::Idle;
        self.error = Some(error);
        Command::None
    }

    /// Back to an empty `Idle` page. Result pages already registered stay
    /// reachable in the registry.
    fn reset(&mut self) {
        self.phase = SearchPhase::Idle;
        self.input.reset();
        self.results.clear();
        self.records.clear();
        self.result_pages.clear();
        self.query.clear();
        self.error = None;
    }

    pub fn render(&self, nav: &Navigation, theme: &Theme) -> Vec<Line<'static>> {
        let (width, height) = nav.viewport();
        let mut lines = vec![
            Line::from(Span::styled(self.description.clone(), theme.description)),
            Line::from(""),
            Line::from(""),
        ];

        match self.phase {
            SearchPhase::Received => lines.extend(self.results.render(width, height, theme)),
            SearchPhase::Loading => lines.push(Line::from(vec![
                self.spinner.render(theme),
                Span::raw("Loading results of query ... "),
            ])),
            SearchPhase::Idle => {
                lines.push(self.input.render_line(theme, true));
                if let Some(error) = &self.error {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("Search failed: {error}"),
                        theme.error,
                    )));
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines
    }
}
