// Sample queries panel
//
// Static, display-only list of queries the API understands.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SAMPLE_QUERIES: [&str; 3] = [
    "show me sales by region",
    "sales over time",
    "display all sales data",
];

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = SAMPLE_QUERIES
        .iter()
        .map(|query| {
            Line::from(vec![
                Span::styled(" • ", theme.muted_style()),
                Span::styled(format!("\"{}\"", query), Style::default().fg(theme.fg)),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(" Try these example queries "),
    );

    f.render_widget(panel, area);
}
