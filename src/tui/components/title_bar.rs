// Title bar component
//
// Renders the app title with a request spinner and the demo marker.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "AI-Powered Data Visualization PoC";

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name
/// - Spinner while a request is in flight
/// - "demo" tag when answers come from built-in data
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let loading_indicator = if app.view.is_loading() {
        format!("  {} generating", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" 📊 {}{}", APP_TITLE, loading_indicator);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.title));
    if app.demo_mode {
        block = block.title_top(Line::from(" demo ").right_aligned());
    }

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(block);

    f.render_widget(title, area);
}
