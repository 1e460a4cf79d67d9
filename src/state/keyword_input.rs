//! Keyword input editing (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte input is safe.
//! Editing never triggers a search; the caller submits explicitly.

/// Text being typed into the keyword box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInput {
    text: String,
    cursor: usize,
}

impl KeywordInput {
    /// Input prefilled with `text`, cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert `ch` at the cursor and advance it.
pub fn handle_char_input(input: KeywordInput, ch: char) -> KeywordInput {
    let at = input.byte_index(input.cursor);
    let KeywordInput { mut text, cursor } = input;
    text.insert(at, ch);
    KeywordInput {
        text,
        cursor: cursor + 1,
    }
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(input: KeywordInput) -> KeywordInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_index(input.cursor - 1);
    let KeywordInput { mut text, cursor } = input;
    text.remove(at);
    KeywordInput {
        text,
        cursor: cursor - 1,
    }
}

/// Move the cursor one character left, saturating at 0.
pub fn handle_cursor_left(input: KeywordInput) -> KeywordInput {
    KeywordInput {
        cursor: input.cursor.saturating_sub(1),
        ..input
    }
}

/// Move the cursor one character right, saturating at the end.
pub fn handle_cursor_right(input: KeywordInput) -> KeywordInput {
    let max_cursor = input.text.chars().count();
    KeywordInput {
        cursor: (input.cursor + 1).min(max_cursor),
        ..input
    }
}

/// Empty the input.
pub fn clear_input(_input: KeywordInput) -> KeywordInput {
    KeywordInput::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> KeywordInput {
        s.chars().fold(KeywordInput::default(), handle_char_input)
    }

    #[test]
    fn typing_appends_and_advances_cursor() {
        let input = typed("dune");
        assert_eq!(input.text(), "dune");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn insert_in_middle() {
        let input = handle_cursor_left(handle_cursor_left(typed("ac")));
        let input = handle_cursor_right(input);
        let input = handle_char_input(input, 'b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let input = handle_cursor_left(typed("x"));
        let result = handle_backspace(input.clone());
        assert_eq!(result, input);
    }

    #[test]
    fn backspace_removes_previous_char() {
        let result = handle_backspace(typed("abc"));
        assert_eq!(result.text(), "ab");
        assert_eq!(result.cursor(), 2);
    }

    #[test]
    fn multibyte_characters_edit_by_char() {
        let input = typed("日本語");
        assert_eq!(input.cursor(), 3);

        let input = handle_backspace(handle_cursor_left(input));
        assert_eq!(input.text(), "日語");
        assert_eq!(input.cursor(), 1);

        let input = handle_char_input(input, 'x');
        assert_eq!(input.text(), "日x語");
    }

    #[test]
    fn cursor_saturates_at_both_ends() {
        let input = handle_cursor_right(typed("ab"));
        assert_eq!(input.cursor(), 2);

        let input = handle_cursor_left(handle_cursor_left(handle_cursor_left(input)));
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn new_places_cursor_at_end() {
        let input = KeywordInput::new("héllo");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn clear_empties_text() {
        assert_eq!(clear_input(typed("abc")), KeywordInput::default());
    }
}
