// Status bar component
//
// Renders session statistics at the bottom: uptime, requests, failures,
// last round-trip time and the request target.

use crate::tui::app::App;
use crate::tui::layout::WidthClass;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEY_HINTS: &str = "F2:logs  F3:theme  Esc:quit";

/// Render the status bar with session statistics
///
/// Adapts to terminal width:
/// - Wide: Full format with labels and key hints
/// - Narrow: Compact icon-based format
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let latency = match app.last_latency {
        Some(d) => format!("~{}ms", d.as_millis()),
        None => "-".to_string(),
    };

    let status_text = if !WidthClass::of(area).is_wide() {
        format!(
            " {} │ 📡 {} │ ✗ {} │ {}",
            app.uptime(),
            app.requests_sent,
            app.requests_failed,
            latency,
        )
    } else {
        let hints = match app.view.input.focus_hint() {
            Some(input_hint) => format!("{}  {}", input_hint, KEY_HINTS),
            None => KEY_HINTS.to_string(),
        };
        format!(
            " {} │ 📡 {} requests │ ✗ {} failed │ {} │ → {} │ {}",
            app.uptime(),
            app.requests_sent,
            app.requests_failed,
            latency,
            app.target(),
            hints,
        )
    };

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
