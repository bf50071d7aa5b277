//! Screens of the browser.
//!
//! Every page is one variant of [`Page`]. A handler receives the action and a
//! [`PageContext`], through which it may move the root navigation and
//! register freshly created pages; it returns the [`Command`] the driver
//! should carry out. Rendering only reads state.

pub mod menu_page;
pub mod result_detail_page;
pub mod search_page;


pub use menu_page::MenuPage;
pub use result_detail_page::{DownloadStatus, ResultDetailPage};
pub use search_page::{SearchPage, SearchPhase, SearchSettings};

use crate::config::Theme;
use crate::interactive_ratatui::domain::models::{InputMode, PageId};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Action;
use crate::interactive_ratatui::ui::registry::Navigation;
use ratatui::text::Line;

#[derive(Debug, Clone)]
pub enum Page {
    Menu(MenuPage),
    Search(SearchPage),
    ResultDetail(ResultDetailPage),
}

impl Page {
    pub fn title(&self) -> &str {
        match self {
            Page::Menu(page) => page.title(),
            Page::Search(page) => page.title(),
            Page::ResultDetail(page) => page.title(),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self {
            Page::Search(page) => page.input_mode(),
            Page::Menu(_) | Page::ResultDetail(_) => InputMode::Navigation,
        }
    }

    pub fn handle(&mut self, action: Action, ctx: &mut PageContext<'_>) -> Command {
        match self {
            Page::Menu(page) => page.handle(action, ctx),
            Page::Search(page) => page.handle(action, ctx),
            Page::ResultDetail(page) => page.handle(action, ctx),
        }
    }

    pub fn render(&self, nav: &Navigation, theme: &Theme) -> Vec<Line<'static>> {
        match self {
            Page::Menu(page) => page.render(theme),
            Page::Search(page) => page.render(nav, theme),
            Page::ResultDetail(page) => page.render(nav, theme),
        }
    }

    pub fn as_menu(&self) -> Option<&MenuPage> {
        match self {
            Page::Menu(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchPage> {
        match self {
            Page::Search(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_result_detail(&self) -> Option<&ResultDetailPage> {
        match self {
            Page::ResultDetail(page) => Some(page),
            _ => None,
        }
    }
}

impl From<MenuPage> for Page {
    fn from(page: MenuPage) -> Self {
        Page::Menu(page)
    }
}

impl From<SearchPage> for Page {
    fn from(page: SearchPage) -> Self {
        Page::Search(page)
    }
}

impl From<ResultDetailPage> for Page {
    fn from(page: ResultDetailPage) -> Self {
        Page::ResultDetail(page)
    }
}

/// What a page handler may touch outside of itself.
pub struct PageContext<'a> {
    id: PageId,
    nav: &'a mut Navigation,
    spawned: Vec<(PageId, Page)>,
}

impl<'a> PageContext<'a> {
    pub fn new(id: PageId, nav: &'a mut Navigation) -> Self {
        Self {
            id,
            nav,
            spawned: Vec::new(),
        }
    }

    /// Id of the page being handled.
    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn nav(&self) -> &Navigation {
        self.nav
    }

    pub fn is_current(&self) -> bool {
        self.nav.current() == self.id
    }

    /// Record the current page under `from_title` and move to `target`.
    pub fn navigate_to(&mut self, target: PageId, from_title: &str) {
        self.nav.navigate_to(target, from_title);
    }

    /// Unwind one level of history. Returns false when already at the root.
    pub fn go_back(&mut self) -> bool {
        self.nav.go_back()
    }

    pub fn hide_help(&mut self) {
        self.nav.set_show_help(false);
    }

    pub fn allocate_result_id(&mut self) -> PageId {
        self.nav.allocate_result_id()
    }

    /// Queue a page for insertion once the handler returns.
    pub fn register(&mut self, id: PageId, page: impl Into<Page>) {
        self.spawned.push((id, page.into()));
    }

    /// Size available to list and text viewports.
    pub fn viewport(&self) -> (u16, u16) {
        self.nav.viewport()
    }

    pub fn into_spawned(self) -> Vec<(PageId, Page)> {
        self.spawned
    }
}
