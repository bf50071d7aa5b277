use crate::config::Theme;
use crate::interactive_ratatui::constants::FRAME_MARGIN_LEFT;
use crate::interactive_ratatui::ui::keymap::KeyMap;
use crate::interactive_ratatui::ui::registry::{Registry, RenderContext};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
};

/// Paints the registry's text tree onto a frame.
pub struct Renderer {
    theme: Theme,
    keymap: KeyMap,
}

impl Renderer {
    pub fn new(theme: Theme, keymap: KeyMap) -> Self {
        Self { theme, keymap }
    }

    pub fn render(&self, f: &mut Frame, registry: &Registry) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FRAME_MARGIN_LEFT), Constraint::Min(0)])
            .split(f.area());

        let text = registry.render(&RenderContext {
            theme: &self.theme,
            keymap: &self.keymap,
        });
        f.render_widget(Paragraph::new(text), chunks[1]);
    }
}
