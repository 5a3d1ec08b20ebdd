// Off-screen rendering
//
// Draws into a ratatui TestBackend and flattens the buffer to plain text.
// Used by `textviz ask` to print a visualization without taking over the
// terminal, and by render tests.

use anyhow::Result;
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};
use unicode_width::UnicodeWidthStr;

/// Render one frame of `width` x `height` cells and return it as text
///
/// Trailing spaces are trimmed from every line.
pub fn render_to_string<F>(width: u16, height: u16, draw: F) -> Result<String>
where
    F: FnOnce(&mut Frame),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(draw)?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Flatten a buffer to lines of text
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        // Cells after a wide glyph are placeholders
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            let symbol = buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" ");
            if skip > 0 {
                skip -= 1;
                continue;
            }
            skip = symbol.width().saturating_sub(1);
            line.push_str(symbol);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
