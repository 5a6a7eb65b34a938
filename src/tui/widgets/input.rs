//! Text input widget
//!
//! A single-line text field with cursor support. The cursor counts
//! characters, not bytes, so multi-byte input edits cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Error shown after the label
    pub error: Option<String>,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Label row, with the error right after it
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut label_spans = vec![Span::styled(self.label.as_str(), label_style)];
        if let Some(error) = &self.error {
            label_spans.push(Span::raw("  "));
            label_spans.push(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(label_spans), area.width);

        if area.height < 2 {
            return;
        }
        let y = area.y + 1;

        let border_color = if self.error.is_some() {
            Color::Red
        } else if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        buf.set_string(area.x, y, "> ", Style::default().fg(border_color));
        let input_start = area.x + 2;

        if self.content.is_empty() && !self.focused {
            buf.set_string(
                input_start,
                y,
                &self.placeholder,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        buf.set_string(input_start, y, &self.content, Style::default().fg(Color::White));

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Ada".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Ada");
        assert_eq!(input.cursor, 3);

        input.backspace();
        assert_eq!(input.value(), "Ad");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("Zoë");
        assert_eq!(input.cursor, 3);

        input.move_left();
        input.insert('ï');
        assert_eq!(input.value(), "Zoïë");

        input.move_end();
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "Zo");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("abc");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor, 0);

        input.move_end();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_render_placeholder() {
        let input = TextInput::new().label("Name").placeholder("e.g. Stephen King");
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("e.g. Stephen King"));
    }
}
