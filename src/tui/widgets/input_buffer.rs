//! Single-line text input with a byte cursor kept on char boundaries.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::theme;

/// Editable line used by the API URL prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    /// Buffer holding `text` with the cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// The text with the cursor cell highlighted.
    pub fn line(&self) -> Line<'static> {
        let (before, rest) = self.content.split_at(self.cursor);
        let mut chars = rest.chars();
        let at_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".into());
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(at_cursor, Style::default().bg(theme::TEXT).fg(theme::BG_BASE)),
            Span::raw(chars.as_str().to_string()),
        ])
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
