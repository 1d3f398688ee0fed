//! Single-line labeled text field with cursor management.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::wizard::{Field, FieldError};
use crate::tui::theme;

/// Rows a field occupies: bordered input plus one line for its error.
pub const FIELD_HEIGHT: u16 = 4;

/// An editable form field bound to one wizard [`Field`].
#[derive(Debug, Clone)]
pub struct TextField {
    field: Field,
    content: String,
    /// Byte offset into `content`, always on a char boundary.
    cursor: usize,
}

impl TextField {
    pub fn new(field: Field) -> Self {
        Self::with_text(field, "")
    }

    pub fn with_text(field: Field, text: &str) -> Self {
        Self {
            field,
            content: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.content.len();
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

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns true if the text changed.
    ///
    /// Navigation keys move the cursor and return false.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('u') {
                let changed = !self.content.is_empty();
                self.clear();
                return changed;
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.content.len();
                self.backspace();
                before != self.content.len()
            }
            KeyCode::Delete => {
                let before = self.content.len();
                self.delete();
                before != self.content.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.move_home();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
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

    /// Render the bordered input and, below it, the field's error if any.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        error: Option<&FieldError>,
        accent: Color,
    ) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(area);

        let block = theme::field_block(self.field.label(), focused, error.is_some(), accent);
        let line = self.input_line(focused);
        frame.render_widget(Paragraph::new(line).block(block), rows[0]);

        if let Some(err) = error {
            let msg = Line::from(Span::styled(format!(" {err}"), theme::error_text()));
            frame.render_widget(Paragraph::new(msg), rows[1]);
        }
    }

    fn input_line(&self, focused: bool) -> Line<'_> {
        if self.content.is_empty() {
            let mut spans = Vec::with_capacity(2);
            if focused {
                spans.push(Span::styled(" ", theme::cursor()));
            }
            spans.push(Span::styled(self.field.placeholder(), theme::placeholder()));
            return Line::from(spans);
        }

        if !focused {
            return Line::from(Span::raw(self.content.as_str()));
        }

        let before = &self.content[..self.cursor];
        let (cursor_char, after) = match self.content[self.cursor..].chars().next() {
            Some(c) => (
                &self.content[self.cursor..self.cursor + c.len_utf8()],
                &self.content[self.cursor + c.len_utf8()..],
            ),
            None => (" ", ""),
        };

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, theme::cursor()),
            Span::raw(after),
        ])
    }
}
