//! Editable single-line text buffer shared by the search box, the message
//! composer, the edit modal and the chat name field.

use super::events::KeyInput;

/// Upper bound on buffer length, in characters.
const MAX_INPUT_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    text: String,
    /// Cursor position as a character index, not a byte index.
    cursor_position: usize,
}

impl TextInputState {
    /// Creates a buffer holding `text` with the cursor at the end.
    pub fn with_text(text: &str) -> Self {
        let mut state = Self::default();
        state.set_text(text);
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(MAX_INPUT_LENGTH).collect();
        self.cursor_position = self.text.chars().count();
    }

    /// Applies an editing key. Returns false if the key is not an editing key,
    /// so callers can interpret it themselves.
    pub fn apply_key(&mut self, key: &KeyInput) -> bool {
        if let Some(ch) = key.as_char() {
            self.insert_char(ch);
            return true;
        }

        if key.ctrl {
            return false;
        }

        match key.key.as_str() {
            "backspace" => self.delete_char_before(),
            "delete" => self.delete_char_at(),
            "left" => self.move_cursor_left(),
            "right" => self.move_cursor_right(),
            "home" => self.move_cursor_home(),
            "end" => self.move_cursor_end(),
            _ => return false,
        }

        true
    }

    /// Inserts a character at the cursor.
    /// Returns false if the buffer is already at its maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
