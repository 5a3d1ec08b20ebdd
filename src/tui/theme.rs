// Theme system for the TUI
//
// Built-in color themes that can be switched at runtime (F3).
// Each theme defines colors for the chrome, the log levels and the charts.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Dracula,
    Nord,
    Solarized,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Dracula,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Look up a theme by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
            ThemeKind::Solarized => "Solarized",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Solarized => Theme::solarized(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,

    // Charts and tables
    pub chart_primary: Color,
    pub chart_secondary: Color,
    pub table_header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,

            chart_primary: Color::Cyan,
            chart_secondary: Color::Magenta,
            table_header: Color::Cyan,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            highlight: Color::Magenta,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,

            chart_primary: Color::Blue,
            chart_secondary: Color::Magenta,
            table_header: Color::Blue,
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            fg: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(117, 113, 94),
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),
            border_type: BorderType::Rounded,

            title: Color::Rgb(166, 226, 46),       // Green
            status_bar: Color::Rgb(102, 217, 239), // Cyan
            highlight: Color::Rgb(230, 219, 116),  // Yellow
            error: Color::Rgb(249, 38, 114),

            log_error: Color::Rgb(249, 38, 114),
            log_warn: Color::Rgb(230, 219, 116),
            log_info: Color::Rgb(102, 217, 239),
            log_debug: Color::Rgb(117, 113, 94),

            chart_primary: Color::Rgb(102, 217, 239),
            chart_secondary: Color::Rgb(174, 129, 255),
            table_header: Color::Rgb(166, 226, 46),
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            fg: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(98, 114, 164), // Comment color
            border: Color::Rgb(68, 71, 90),
            border_focused: Color::Rgb(189, 147, 249), // Purple
            border_type: BorderType::Rounded,

            title: Color::Rgb(139, 233, 253),      // Cyan
            status_bar: Color::Rgb(80, 250, 123),  // Green
            highlight: Color::Rgb(241, 250, 140),  // Yellow
            error: Color::Rgb(255, 85, 85),

            log_error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),

            chart_primary: Color::Rgb(139, 233, 253),
            chart_secondary: Color::Rgb(255, 121, 198),
            table_header: Color::Rgb(189, 147, 249),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            fg: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208), // Frost
            border_type: BorderType::Plain,

            title: Color::Rgb(136, 192, 208),      // Frost
            status_bar: Color::Rgb(163, 190, 140), // Green
            highlight: Color::Rgb(235, 203, 139),  // Yellow
            error: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),

            chart_primary: Color::Rgb(136, 192, 208),
            chart_secondary: Color::Rgb(180, 142, 173),
            table_header: Color::Rgb(129, 161, 193),
        }
    }

    /// Solarized dark theme
    pub fn solarized() -> Self {
        Self {
            fg: Color::Rgb(131, 148, 150),
            muted: Color::Rgb(88, 110, 117),
            border: Color::Rgb(88, 110, 117),
            border_focused: Color::Rgb(38, 139, 210), // Blue
            border_type: BorderType::Plain,

            title: Color::Rgb(38, 139, 210),     // Blue
            status_bar: Color::Rgb(133, 153, 0), // Green
            highlight: Color::Rgb(181, 137, 0),  // Yellow
            error: Color::Rgb(220, 50, 47),

            log_error: Color::Rgb(220, 50, 47),
            log_warn: Color::Rgb(181, 137, 0),
            log_info: Color::Rgb(38, 139, 210),
            log_debug: Color::Rgb(88, 110, 117),

            chart_primary: Color::Rgb(42, 161, 152),
            chart_secondary: Color::Rgb(211, 54, 130),
            table_header: Color::Rgb(38, 139, 210),
        }
    }

    // Helper methods for creating styles

    /// Border style, brighter when focused
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Secondary text (placeholders, hints, disabled controls)
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
