use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Single-line edit buffer: draft text plus a byte-offset cursor kept on
/// grapheme boundaries.
///
/// This is the explicit form of the original UI's two-way bound inputs: the
/// buffer is the value, the key handler is the change path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    pub text: String,
    pub cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        LineBuffer::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end
    pub fn from_text(text: &str) -> Self {
        LineBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The draft with surrounding whitespace removed (submission view)
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor. Newlines flatten to spaces; carriage
    /// returns are dropped.
    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace('\n', " ").replace('\r', "");
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Remove the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(start) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    /// Remove the grapheme at the cursor
    pub fn delete(&mut self) {
        if let Some(end) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Jump to the start of the previous word
    pub fn move_word_left(&mut self) {
        let trimmed = self.text[..self.cursor].trim_end();
        match trimmed.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
            Some((i, c)) => self.cursor = i + c.len_utf8(),
            None => self.cursor = 0,
        }
    }

    /// Jump past the end of the next word
    pub fn move_word_right(&mut self) {
        let after = &self.text[self.cursor..];
        let skipped = after.len() - after.trim_start().len();
        let rest = &after[skipped..];
        match rest.find(char::is_whitespace) {
            Some(i) => self.cursor += skipped + i,
            None => self.cursor = self.text.len(),
        }
    }
}

/// Apply a text-editing key to a buffer. Returns false for keys that are not
/// buffer edits (mode keys like Enter and Esc stay with the caller).
pub(super) fn handle_buffer_key(buffer: &mut LineBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left if ctrl => buffer.move_word_left(),
        KeyCode::Right if ctrl => buffer.move_word_right(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        KeyCode::Char('a') if ctrl => buffer.move_home(),
        KeyCode::Char('e') if ctrl => buffer.move_end(),
        KeyCode::Char('u') if ctrl => buffer.clear(),
        KeyCode::Char(c) if !ctrl => buffer.insert_char(c),
        _ => return false,
    }
    true
}
