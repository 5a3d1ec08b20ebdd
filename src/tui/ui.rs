// UI rendering - lays out the components for one frame
//
// Everything here is a pure function of `App`, so the same code draws to the
// real terminal and to the off-screen buffer used by `textviz ask`.

use super::app::App;
use super::components::{
    chart_area, error_banner, query_input, render_logs_panel, render_status, render_title,
    samples_panel,
};
use super::layout::WidthClass;
use crate::tui::theme::Theme;
use crate::viz::VisualizationResult;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Height of the logs panel when visible
const LOGS_HEIGHT: u16 = 8;
/// Width of the sample queries column on wide terminals
const SAMPLES_WIDTH: u16 = 34;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let error_height = app
        .view
        .error()
        .map(|message| error_banner::height_for(message, area.width))
        .unwrap_or(0);
    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };

    // Split the terminal into vertical sections:
    // - Title bar (3 lines fixed)
    // - Query input (3 lines fixed)
    // - Error banner (only when there is an error)
    // - Main content (chart area and samples, fills remaining space)
    // - System logs (F2)
    // - Status bar (2 lines fixed)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(8),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(area);

    render_title(f, chunks[0], app);

    query_input::render(
        f,
        chunks[1],
        &app.view.input,
        app.view.can_submit(),
        app.view.is_loading(),
        &app.theme,
    );

    if let Some(message) = app.view.error() {
        error_banner::render(f, chunks[2], message, &app.theme);
    }

    render_main(f, chunks[3], app.view.result(), &app.theme);

    if app.show_logs {
        render_logs_panel(f, chunks[4], app);
    }

    render_status(f, chunks[5], app);
}

/// Chart area with the sample queries beside it (wide) or below it
fn render_main(f: &mut Frame, area: Rect, result: Option<&VisualizationResult>, theme: &Theme) {
    let (chart, samples) = if WidthClass::of(area).is_wide() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(SAMPLES_WIDTH)])
            .split(area);
        (cols[0], cols[1])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(5)])
            .split(area);
        (rows[0], rows[1])
    };

    chart_area::render(f, chart, result, theme);
    samples_panel::render(f, samples, theme);
}

/// Draw only the visualization, as `textviz ask` prints it
pub fn draw_result(f: &mut Frame, result: &VisualizationResult, theme: &Theme) {
    let area = f.area();
    chart_area::render(f, area, Some(result), theme);
}
