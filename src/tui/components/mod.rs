// Components module - UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: App name, request spinner, demo tag
// - Query input: Text box with the submit control
// - Status bar: Uptime, requests, latency, target
// - Logs panel: System log entries (F2)
//
// Content components draw the query cycle: error banner, chart area and
// the sample queries.

pub mod chart_area;
pub mod error_banner;
pub mod logs_panel;
pub mod query_input;
pub mod samples_panel;
pub mod status_bar;
pub mod title_bar;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
