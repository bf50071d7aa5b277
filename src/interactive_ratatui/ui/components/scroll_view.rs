use crate::interactive_ratatui::constants::PAGE_SIZE;

/// Read-only text viewport. Lines are wrapped to the width they are viewed
/// at, so every query takes the current viewport size.
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    content: Vec<String>,
    scroll_offset: usize,
}

/// Wrap `line` to `width` columns, preferring to break after a space in the
/// second half of the row.
fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if line.is_empty() || width == 0 {
        out.push(line.to_string());
        return;
    }

    let chars: Vec<char> = line.chars().collect();
    let mut start = 0;
    while start < chars.len() {
        let mut end = (start + width).min(chars.len());
        if end < chars.len() {
            if let Some(space) = chars[start..end].iter().rposition(|c| *c == ' ') {
                if space > width / 2 {
                    end = start + space + 1;
                }
            }
        }
        out.push(chars[start..end].iter().collect());
        start = end;
    }
}

impl ScrollView {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.lines().map(str::to_string).collect(),
            scroll_offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn wrapped(&self, width: u16) -> Vec<String> {
        let mut out = Vec::with_capacity(self.content.len());
        for line in &self.content {
            wrap_line(line, usize::from(width), &mut out);
        }
        out
    }

    pub fn max_offset(&self, width: u16, height: u16) -> usize {
        self.wrapped(width).len().saturating_sub(usize::from(height))
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, width: u16, height: u16) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_offset(width, height));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(PAGE_SIZE);
    }

    pub fn page_down(&mut self, width: u16, height: u16) {
        self.scroll_down(PAGE_SIZE, width, height);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, width: u16, height: u16) {
        self.scroll_offset = self.max_offset(width, height);
    }

    /// Pull the offset back in range after the viewport grew or narrowed
    pub fn clamp(&mut self, width: u16, height: u16) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset(width, height));
    }

    pub fn visible_lines(&self, width: u16, height: u16) -> Vec<String> {
        let wrapped = self.wrapped(width);
        let start = self.scroll_offset.min(wrapped.len().saturating_sub(usize::from(height)));
        wrapped
            .into_iter()
            .skip(start)
            .take(usize::from(height))
            .collect()
    }

    /// How far through the content the bottom of the window is, 0..=100
    pub fn scroll_percent(&self, width: u16, height: u16) -> u16 {
        let max = self.max_offset(width, height);
        if max == 0 {
            return 100;
        }
        let offset = self.scroll_offset.min(max);
        ((offset * 100) / max) as u16
    }
}
