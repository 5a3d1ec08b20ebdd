// Width classes for responsive layout
//
// The screen switches between two arrangements: samples beside the chart
// with a labelled status line, or samples below it with a compact one.

use ratatui::layout::Rect;

/// Narrowest terminal that gets the side-by-side layout
pub const WIDE_MIN_COLS: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Samples stacked under the chart, compact status line
    Narrow,
    /// Samples in a side column, full status line with key hints
    Wide,
}

impl WidthClass {
    pub fn from_width(width: u16) -> Self {
        if width >= WIDE_MIN_COLS {
            WidthClass::Wide
        } else {
            WidthClass::Narrow
        }
    }

    pub fn of(area: Rect) -> Self {
        Self::from_width(area.width)
    }

    pub fn is_wide(self) -> bool {
        self == WidthClass::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(WidthClass::from_width(0), WidthClass::Narrow);
        assert_eq!(WidthClass::from_width(WIDE_MIN_COLS - 1), WidthClass::Narrow);
        assert_eq!(WidthClass::from_width(WIDE_MIN_COLS), WidthClass::Wide);
        assert!(WidthClass::of(Rect::new(0, 0, 140, 10)).is_wide());
        assert!(!WidthClass::of(Rect::new(0, 0, 70, 10)).is_wide());
    }
}
