use crate::config::Theme;
use ratatui::text::Span;

const DOT_FRAMES: [&str; 8] = ["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "];

/// Braille dot spinner advanced by `Action::Tick`.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % DOT_FRAMES.len();
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn render(&self, theme: &Theme) -> Span<'static> {
        Span::styled(DOT_FRAMES[self.frame], theme.spinner)
    }
}
