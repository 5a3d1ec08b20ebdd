//! Query input component
//!
//! Single-line text editor for the natural-language query, plus the submit
//! control drawn into the block's title. The cursor is tracked in chars so
//! multi-byte input edits cleanly; display width comes from `unicode-width`.

use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Enter your query (e.g., 'show me sales by region')";
const SUBMIT_LABEL: &str = " Generate Visualization ";
const SUBMITTING_LABEL: &str = " Generating... ";

/// Editable query text with a cursor
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    text: String,
    /// Cursor position in chars (0..=char count)
    cursor: usize,
}

impl QueryInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text and move the cursor to the end
    #[cfg(test)]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Display width of the text before the cursor
    fn cursor_width(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }
}

impl Interactive for QueryInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('a') if ctrl => self.home(),
            KeyCode::Char('e') if ctrl => self.end(),
            KeyCode::Char(_) if ctrl => return Handled::No,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter:submit  Ctrl+U:clear")
    }
}

/// Render the input box
///
/// `can_submit` styles the submit control; `loading` swaps its label and
/// dims the text the same way a disabled input would look.
pub fn render(
    f: &mut Frame,
    area: Rect,
    input: &QueryInput,
    can_submit: bool,
    loading: bool,
    theme: &Theme,
) {
    let submit_style = if can_submit {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.muted_style()
    };
    let label = if loading {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(!loading))
        .title(" Query ")
        .title_top(
            Line::from(Span::styled(format!("[{}]", label), submit_style)).right_aligned(),
        );

    let inner_width = area.width.saturating_sub(2) as usize;

    // Scroll horizontally so the cursor stays inside the box
    let cursor_col = input.cursor_width();
    let offset = cursor_col.saturating_sub(inner_width.saturating_sub(1));

    let content = if input.text().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, theme.muted_style()))
    } else {
        let style = if loading {
            theme.muted_style()
        } else {
            Style::default().fg(theme.fg)
        };
        Line::from(Span::styled(input.text().to_string(), style))
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .scroll((0, offset as u16));
    f.render_widget(paragraph, area);

    if !loading && area.width > 2 && area.height > 2 {
        let x = area.x + 1 + (cursor_col - offset) as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut QueryInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_and_editing() {
        let mut input = QueryInput::default();
        type_str(&mut input, "sales by regon");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.insert('i');
        assert_eq!(input.text(), "sales by region");

        input.handle_key(key(KeyCode::End));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "sales by regio");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "ales by regio");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn multibyte_characters() {
        let mut input = QueryInput::default();
        type_str(&mut input, "ventes par région");
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "ventes par rég");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "ventes par ré");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut input = QueryInput::default();
        input.set_text("something");
        let handled = input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(handled.was_handled());
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn unrelated_keys_bubble_up() {
        let mut input = QueryInput::default();
        assert_eq!(input.handle_key(key(KeyCode::Enter)), Handled::No);
        assert_eq!(input.handle_key(key(KeyCode::F(2))), Handled::No);
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Handled::No
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn cursor_is_clamped() {
        let mut input = QueryInput::default();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.set_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.backspace();
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "");
    }
}
