//! Line editing for the entry field and modal prompts.
//!
//! `InputLine` manages a text buffer with cursor movement. The buffer
//! is a `Vec<char>` so cursor positions stay correct with multi-byte
//! characters.

/// A single-line editor with a movable cursor.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    buffer: Vec<char>,
    cursor: usize,
}

impl InputLine {
    /// Create a new empty input line.
    pub fn new() -> Self {
        InputLine {
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    /// Replace the contents with `text` and place the cursor at the
    /// end. Used to seed the edit prompt with an item's current text.
    pub fn seed(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor position (forward delete).
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clear the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Current buffer contents.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Current cursor position (character index).
    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the current contents, clearing the line.
    pub fn take(&mut self) -> String {
        let text = self.text();
        self.clear();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_text() {
        let mut line = InputLine::new();
        for ch in "abc".chars() {
            line.insert(ch);
        }
        assert_eq!(line.text(), "abc");
        assert_eq!(line.cursor_pos(), 3);
    }

    #[test]
    fn insert_at_cursor_position() {
        let mut line = InputLine::new();
        line.seed("ac");
        line.move_left();
        line.insert('b');
        assert_eq!(line.text(), "abc");
    }

    #[test]
    fn delete_back_at_start_is_noop() {
        let mut line = InputLine::new();
        line.seed("x");
        line.move_home();
        line.delete_back();
        assert_eq!(line.text(), "x");
    }

    #[test]
    fn delete_forward_removes_under_cursor() {
        let mut line = InputLine::new();
        line.seed("abc");
        line.move_home();
        line.delete_forward();
        assert_eq!(line.text(), "bc");
    }

    #[test]
    fn seed_places_cursor_at_end() {
        let mut line = InputLine::new();
        line.seed("Buy milk");
        assert_eq!(line.cursor_pos(), 8);
        line.insert('!');
        assert_eq!(line.text(), "Buy milk!");
    }

    #[test]
    fn take_clears_the_line() {
        let mut line = InputLine::new();
        line.seed("done");
        assert_eq!(line.take(), "done");
        assert!(line.is_empty());
        assert_eq!(line.cursor_pos(), 0);
    }

    #[test]
    fn multibyte_chars_count_as_one() {
        let mut line = InputLine::new();
        line.seed("héllo");
        assert_eq!(line.cursor_pos(), 5);
        line.move_home();
        line.move_right();
        line.delete_forward();
        assert_eq!(line.text(), "hllo");
    }
}
