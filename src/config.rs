//! Runtime configuration, built once in `main` and passed down by reference.

use crate::entrez::format::DEFAULT_LABEL_PADDING;
use ratatui::style::{Color, Modifier, Style};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
pub const DEFAULT_DATABASE: &str = "nuccore";
pub const DEFAULT_SEQUENCE_PATH: &str = "./sequence.txt";

/// First id handed out to pages created from fetched records.
pub const DEFAULT_RESULT_PAGE_OFFSET: u32 = 1000;

#[derive(Debug, Clone)]
pub struct EntrezConfig {
    pub base_url: String,
    /// Database used by search pages that do not name their own.
    pub database: String,
    pub api_key: Option<String>,
    /// `retmax` for esearch.
    pub max_results: usize,
    pub timeout: Duration,
}

impl Default for EntrezConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            api_key: None,
            max_results: 20,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub entrez: EntrezConfig,
    /// Where a downloaded sequence is written. Overwritten on every download.
    pub sequence_path: PathBuf,
    pub label_padding: usize,
    pub result_page_offset: u32,
    /// Terminate the session on a failed search instead of showing the error.
    pub fatal_fetch_errors: bool,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entrez: EntrezConfig::default(),
            sequence_path: PathBuf::from(DEFAULT_SEQUENCE_PATH),
            label_padding: DEFAULT_LABEL_PADDING,
            result_page_offset: DEFAULT_RESULT_PAGE_OFFSET,
            fatal_fetch_errors: false,
            theme: Theme::default(),
        }
    }
}

/// Styles used by every page renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    pub breadcrumb: Style,
    pub title: Style,
    pub description: Style,
    pub card: Style,
    pub selected_card: Style,
    pub list_title: Style,
    pub item_title: Style,
    pub item_description: Style,
    pub selected_item_title: Style,
    pub selected_item_description: Style,
    pub cursor: Style,
    pub placeholder: Style,
    pub spinner: Style,
    pub ruler: Style,
    pub help_key: Style,
    pub help_description: Style,
    pub success: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let pink = Color::Indexed(211);
        let subtle = Color::Indexed(241);

        Self {
            breadcrumb: Style::default().bg(Color::Indexed(8)).fg(Color::White),
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            description: Style::default(),
            card: Style::default(),
            selected_card: Style::default().fg(pink).add_modifier(Modifier::BOLD),
            list_title: Style::default()
                .bg(Color::Indexed(62))
                .fg(Color::Indexed(230)),
            item_title: Style::default(),
            item_description: Style::default().fg(subtle),
            selected_item_title: Style::default().fg(Color::Indexed(170)),
            selected_item_description: Style::default().fg(Color::Indexed(168)),
            cursor: Style::default().bg(Color::White).fg(Color::Black),
            placeholder: Style::default().fg(subtle),
            spinner: Style::default().fg(Color::Indexed(205)),
            ruler: Style::default().fg(subtle),
            help_key: Style::default().fg(Color::Indexed(245)),
            help_description: Style::default().fg(Color::Indexed(239)),
            success: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}
