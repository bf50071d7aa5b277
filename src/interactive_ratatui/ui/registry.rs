use crate::config::Theme;
use crate::interactive_ratatui::constants::{
    BREADCRUMB_SEPARATOR, DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH, VIEWPORT_HEIGHT_MARGIN,
    VIEWPORT_WIDTH_MARGIN,
};
use crate::interactive_ratatui::domain::models::{Crumb, InputMode, PageId};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::components::help_legend::HelpLegend;
use crate::interactive_ratatui::ui::events::Action;
use crate::interactive_ratatui::ui::keymap::KeyMap;
use crate::interactive_ratatui::ui::pages::{Page, PageContext};
use ratatui::text::{Line, Span, Text};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("root page {0} is not registered")]
    MissingRoot(PageId),
    #[error("page {0} is registered twice")]
    DuplicatePage(PageId),
    #[error("menu {menu} has no options")]
    EmptyMenu { menu: PageId },
    #[error("menu {menu} points to unregistered page {target}")]
    DanglingDestination { menu: PageId, target: PageId },
    #[error("static page {page} collides with result ids starting at {offset}")]
    StaticIdInResultRange { page: PageId, offset: PageId },
}

/// Where the user is and how they got there.
#[derive(Debug, Clone)]
pub struct Navigation {
    current: PageId,
    history: Vec<Crumb>,
    show_help: bool,
    quitting: bool,
    width: u16,
    height: u16,
    next_result_id: PageId,
}

impl Navigation {
    pub fn new(root: PageId, result_offset: PageId) -> Self {
        Self {
            current: root,
            history: Vec::new(),
            show_help: false,
            quitting: false,
            width: DEFAULT_TERMINAL_WIDTH,
            height: DEFAULT_TERMINAL_HEIGHT,
            next_result_id: result_offset,
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn history(&self) -> &[Crumb] {
        &self.history
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Size left for list and record viewports after page chrome.
    pub fn viewport(&self) -> (u16, u16) {
        (
            self.width.saturating_sub(VIEWPORT_WIDTH_MARGIN),
            self.height.saturating_sub(VIEWPORT_HEIGHT_MARGIN),
        )
    }

    pub fn navigate_to(&mut self, target: PageId, from_title: &str) {
        tracing::debug!(from = %self.current, to = %target, depth = self.history.len() + 1, "navigate");
        self.history.push(Crumb {
            page: self.current,
            title: from_title.to_string(),
        });
        self.current = target;
    }

    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(crumb) => {
                tracing::debug!(from = %self.current, to = %crumb.page, depth = self.history.len(), "back");
                self.current = crumb.page;
                true
            }
            None => false,
        }
    }

    /// Next unused id in the result range. Ids are never reused.
    pub fn allocate_result_id(&mut self) -> PageId {
        let id = self.next_result_id;
        self.next_result_id = id.next();
        id
    }
}

/// Borrowed inputs for [`Registry::render`].
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub keymap: &'a KeyMap,
}

/// Addressable page table plus the navigation state that moves through it.
#[derive(Debug)]
pub struct Registry {
    pages: HashMap<PageId, Page>,
    nav: Navigation,
    result_offset: PageId,
}

impl Registry {
    pub fn new(
        pages: Vec<(PageId, Page)>,
        root: PageId,
        result_offset: PageId,
    ) -> Result<Self, RegistryError> {
        let mut table = HashMap::with_capacity(pages.len());
        for (id, page) in pages {
            if id >= result_offset {
                return Err(RegistryError::StaticIdInResultRange {
                    page: id,
                    offset: result_offset,
                });
            }
            if table.insert(id, page).is_some() {
                return Err(RegistryError::DuplicatePage(id));
            }
        }

        if !table.contains_key(&root) {
            return Err(RegistryError::MissingRoot(root));
        }

        for (id, page) in &table {
            if let Some(menu) = page.as_menu() {
                if menu.options().is_empty() {
                    return Err(RegistryError::EmptyMenu { menu: *id });
                }
                for (_, target) in menu.options() {
                    if !table.contains_key(target) {
                        return Err(RegistryError::DanglingDestination {
                            menu: *id,
                            target: *target,
                        });
                    }
                }
            }
        }

        Ok(Self {
            pages: table,
            nav: Navigation::new(root, result_offset),
            result_offset,
        })
    }

    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    pub fn current(&self) -> PageId {
        self.nav.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(&self.nav.current)
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(&id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Ids of every page created at runtime, ascending.
    pub fn result_page_ids(&self) -> Vec<PageId> {
        let mut ids: Vec<PageId> = self
            .pages
            .keys()
            .copied()
            .filter(|id| *id >= self.result_offset)
            .collect();
        ids.sort();
        ids
    }

    pub fn input_mode(&self) -> InputMode {
        self.current_page()
            .map(Page::input_mode)
            .unwrap_or(InputMode::Navigation)
    }

    pub fn is_quitting(&self) -> bool {
        self.nav.quitting
    }

    /// Handle one action and return the effect to carry out.
    pub fn dispatch(&mut self, action: Action) -> Command {
        match action {
            Action::Quit => {
                tracing::info!(page = %self.nav.current, "quit requested");
                self.nav.quitting = true;
                return Command::Quit;
            }
            Action::ToggleHelp => {
                self.nav.show_help = !self.nav.show_help;
                return Command::None;
            }
            Action::Resize(width, height) => self.nav.set_size(width, height),
            _ => {}
        }

        // Completions go back to whoever asked, current or not.
        let target = action.origin().unwrap_or(self.nav.current);
        self.delegate(target, action)
    }

    fn delegate(&mut self, id: PageId, action: Action) -> Command {
        let Some(page) = self.pages.get_mut(&id) else {
            tracing::warn!(page = %id, ?action, "action for unregistered page dropped");
            return Command::None;
        };

        let mut ctx = PageContext::new(id, &mut self.nav);
        let command = page.handle(action, &mut ctx);

        for (new_id, new_page) in ctx.into_spawned() {
            tracing::debug!(page = %new_id, title = new_page.title(), "registering page");
            self.pages.insert(new_id, new_page);
        }
        command
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Text<'static> {
        if self.nav.quitting {
            return Text::from(vec![Line::from(""), Line::from("See you later!"), Line::from("")]);
        }

        let Some(page) = self.current_page() else {
            return Text::default();
        };

        let crumbs: Vec<&str> = self
            .nav
            .history
            .iter()
            .map(|crumb| crumb.title.as_str())
            .chain(std::iter::once(page.title()))
            .collect();

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {} ", crumbs.join(BREADCRUMB_SEPARATOR)),
                ctx.theme.breadcrumb,
            )),
            Line::from(""),
        ];
        lines.extend(page.render(&self.nav, ctx.theme));

        if self.nav.show_help {
            let columns = ctx.keymap.help_columns();
            let legend = HelpLegend::new(&columns).render(ctx.theme);
            let padding = usize::from(self.nav.height)
                .saturating_sub(lines.len() + legend.len());
            lines.extend(std::iter::repeat_n(Line::from(""), padding));
            lines.extend(legend);
        }

        Text::from(lines)
    }
}
