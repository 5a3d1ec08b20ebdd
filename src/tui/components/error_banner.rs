// Error banner component
//
// One bordered paragraph holding the last request failure. The banner is
// sized from the word-wrapped line count so the whole message is visible.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn wrapped(message: &str) -> Paragraph<'_> {
    Paragraph::new(message).wrap(Wrap { trim: true })
}

/// Rows the banner needs for `message` at `width` columns (borders included)
pub fn height_for(message: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1);
    let lines = wrapped(message).line_count(inner).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

pub fn render(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let banner = wrapped(message)
        .style(Style::default().fg(theme.error))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.error_style())
                .title(" Error "),
        );

    f.render_widget(banner, area);
}
