//! Box-drawing helpers shared by the page renderers.

use crate::config::Theme;
use ratatui::text::{Line, Span};

/// Title in a rounded box whose right edge joins a ruler running to `width`:
///
/// ```text
/// ╭───────────╮
/// │ NM_000207 ├──────────
/// ╰───────────╯
/// ```
pub fn banner(title: &str, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let inner = title.chars().count() + 2;
    let box_width = inner + 2;
    let ruler = usize::from(width).saturating_sub(box_width);

    vec![
        Line::from(Span::styled(format!("╭{}╮", "─".repeat(inner)), theme.ruler)),
        Line::from(vec![
            Span::styled("│ ", theme.ruler),
            Span::styled(title.to_string(), theme.title),
            Span::styled(format!(" ├{}", "─".repeat(ruler)), theme.ruler),
        ]),
        Line::from(Span::styled(format!("╰{}╯", "─".repeat(inner)), theme.ruler)),
    ]
}

/// Full-width ruler ending in a boxed label, e.g. a scroll percentage.
pub fn footer(label: &str, width: u16, theme: &Theme) -> Line<'static> {
    let boxed = format!("┤ {label} │");
    let ruler = usize::from(width).saturating_sub(boxed.chars().count());
    Line::from(vec![
        Span::styled("─".repeat(ruler), theme.ruler),
        Span::styled(boxed, theme.ruler),
    ])
}

/// A single-row bordered card around `label`; `width` is the inner width.
pub fn card(label: &str, width: usize, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
    let style = if selected { theme.selected_card } else { theme.card };
    let pad = width.saturating_sub(label.chars().count());
    vec![
        Line::from(Span::styled(format!("┌{}┐", "─".repeat(width)), style)),
        Line::from(Span::styled(
            format!("│{label}{}│", " ".repeat(pad)),
            style,
        )),
        Line::from(Span::styled(format!("└{}┘", "─".repeat(width)), style)),
    ]
}
