// Editable form fields
//
// A small text-editing core for the form: one buffer type covering both
// single-line fields (scope, subject, breaking detail) and multi-line areas
// (body, footer), plus the focus ring that walks the form. The cursor is a
// char index into the buffer, never a byte index, so multibyte input stays
// intact under editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// What a key did to a field
///
/// `Edited` means the buffer changed and the preview must be rescheduled;
/// `Moved` only moved the cursor; `Ignored` lets the key bubble up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Edited,
    Moved,
    Ignored,
}

/// An editable text buffer with a char-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    multiline: bool,
}

impl TextInput {
    /// Single-line field: Enter is not an edit
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Multi-line area: Enter inserts a newline
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Raw buffer contents
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Field value as read into the form: trimmed of surrounding whitespace
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Reset to the default (empty) state
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the cursor's char index
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Cursor position as (line, display column) for terminal placement
    ///
    /// Lines split on the newlines the buffer actually contains; the column
    /// is a display width, so wide chars advance the cursor correctly.
    pub fn cursor_line_col(&self) -> (u16, u16) {
        let mut line: u16 = 0;
        let mut col: u16 = 0;
        for c in self.value.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += c.width().unwrap_or(0) as u16;
            }
        }
        (line, col)
    }

    /// Apply a key to the buffer
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // Control chords belong to the application, not the buffer
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                KeyOutcome::Edited
            }
            KeyCode::Enter if self.multiline => {
                self.insert_char('\n');
                KeyOutcome::Edited
            }
            KeyCode::Backspace => {
                if self.backspace() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            KeyCode::Delete => {
                if self.delete_forward() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                KeyOutcome::Moved
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                KeyOutcome::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                KeyOutcome::Moved
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                KeyOutcome::Moved
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

/// The form's fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    Type,
    Scope,
    Subject,
    Body,
    Footer,
    Breaking,
    BreakingDetail,
}

impl FieldId {
    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Type => "Type",
            FieldId::Scope => "Scope",
            FieldId::Subject => "Subject",
            FieldId::Body => "Body",
            FieldId::Footer => "Footer",
            FieldId::Breaking => "Breaking change",
            FieldId::BreakingDetail => "What breaks",
        }
    }

    /// Next field in the ring; the detail row is skipped while hidden
    pub fn next(self, detail_visible: bool) -> Self {
        match self {
            FieldId::Type => FieldId::Scope,
            FieldId::Scope => FieldId::Subject,
            FieldId::Subject => FieldId::Body,
            FieldId::Body => FieldId::Footer,
            FieldId::Footer => FieldId::Breaking,
            FieldId::Breaking => {
                if detail_visible {
                    FieldId::BreakingDetail
                } else {
                    FieldId::Type
                }
            }
            FieldId::BreakingDetail => FieldId::Type,
        }
    }

    /// Previous field in the ring; the detail row is skipped while hidden
    pub fn prev(self, detail_visible: bool) -> Self {
        match self {
            FieldId::Type => {
                if detail_visible {
                    FieldId::BreakingDetail
                } else {
                    FieldId::Breaking
                }
            }
            FieldId::Scope => FieldId::Type,
            FieldId::Subject => FieldId::Scope,
            FieldId::Body => FieldId::Subject,
            FieldId::Footer => FieldId::Body,
            FieldId::Breaking => FieldId::Footer,
            FieldId::BreakingDetail => FieldId::Breaking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "feat");
        assert_eq!(input.value(), "feat");
        input.handle_key(press(KeyCode::Home));
        input.handle_key(press(KeyCode::Char('x')));
        assert_eq!(input.value(), "xfeat");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "scope");
        assert_eq!(input.handle_key(press(KeyCode::Backspace)), KeyOutcome::Edited);
        assert_eq!(input.value(), "scop");
        input.handle_key(press(KeyCode::Home));
        // Nothing left of the cursor: not an edit
        assert_eq!(input.handle_key(press(KeyCode::Backspace)), KeyOutcome::Moved);
        assert_eq!(input.value(), "scop");
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "abc");
        input.handle_key(press(KeyCode::Home));
        assert_eq!(input.handle_key(press(KeyCode::Delete)), KeyOutcome::Edited);
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn multibyte_editing_keeps_cursor_consistent() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "héllo");
        input.handle_key(press(KeyCode::Left));
        input.handle_key(press(KeyCode::Left));
        input.handle_key(press(KeyCode::Left));
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn enter_is_newline_only_in_multiline() {
        let mut single = TextInput::single_line();
        assert_eq!(single.handle_key(press(KeyCode::Enter)), KeyOutcome::Ignored);

        let mut multi = TextInput::multi_line();
        type_str(&mut multi, "one");
        assert_eq!(multi.handle_key(press(KeyCode::Enter)), KeyOutcome::Edited);
        type_str(&mut multi, "two");
        assert_eq!(multi.value(), "one\ntwo");
    }

    #[test]
    fn control_chords_bubble_up() {
        let mut input = TextInput::single_line();
        let chord = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(chord), KeyOutcome::Ignored);
        assert!(input.is_empty());
    }

    #[test]
    fn cursor_line_col_tracks_newlines_and_width() {
        let mut input = TextInput::multi_line();
        type_str(&mut input, "ab");
        input.handle_key(press(KeyCode::Enter));
        type_str(&mut input, "c漢");
        // Cursor sits after the wide char on the second line
        assert_eq!(input.cursor_line_col(), (1, 3));
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "  add button  ");
        assert_eq!(input.trimmed(), "add button");
    }

    #[test]
    fn focus_ring_skips_hidden_detail_row() {
        assert_eq!(FieldId::Breaking.next(false), FieldId::Type);
        assert_eq!(FieldId::Breaking.next(true), FieldId::BreakingDetail);
        assert_eq!(FieldId::BreakingDetail.next(true), FieldId::Type);
        assert_eq!(FieldId::Type.prev(false), FieldId::Breaking);
        assert_eq!(FieldId::Type.prev(true), FieldId::BreakingDetail);
    }

    #[test]
    fn focus_ring_round_trips() {
        for visible in [false, true] {
            let mut id = FieldId::Type;
            for _ in 0..16 {
                let next = id.next(visible);
                assert_eq!(next.prev(visible), id);
                id = next;
            }
        }
    }
}
