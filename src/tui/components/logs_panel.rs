//! Logs panel component
//!
//! Displays the most recent entries of the shared [`LogBuffer`], newest at
//! the bottom, color-coded by level. Toggled with F2.
//!
//! [`LogBuffer`]: crate::logging::LogBuffer

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the logs panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.tail(height);
    let theme = &app.theme;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(" System Logs "),
    );

    f.render_widget(list, area);
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_format_pads_level() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 13, 4, 5).unwrap(),
            level: LogLevel::Warn,
            message: "Query failed".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "[13:04:05] WARN  Query failed");
    }
}
