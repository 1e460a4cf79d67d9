//! Keyword input widget.

use crate::state::KeywordInput;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Keyword text box.
///
/// Shows the cursor only while focused. The submitted keyword (the one the
/// current results were fetched with) is shown in the title when it differs
/// from the text being edited.
pub struct KeywordBox<'a> {
    input: &'a KeywordInput,
    submitted: &'a str,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> KeywordBox<'a> {
    /// Create new KeywordBox widget.
    pub fn new(input: &'a KeywordInput, submitted: &'a str, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            submitted,
            focused,
            palette,
        }
    }

    fn title(&self) -> String {
        if self.input.text() != self.submitted && !self.submitted.is_empty() {
            format!(" Keyword (searching: {}) ", self.submitted)
        } else {
            " Keyword ".to_string()
        }
    }
}

impl Widget for KeywordBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.input.text();
        let line = if self.focused {
            let cursor = self.input.cursor();
            let before: String = text.chars().take(cursor).collect();
            let mut after = text.chars().skip(cursor);
            let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
            let rest: String = after.collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char,
                    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                ),
                Span::raw(rest),
            ])
        } else if text.is_empty() {
            Line::styled("press / to search", self.palette.muted)
        } else {
            Line::from(text)
        };

        let border_style = if self.focused {
            self.palette.focused_border
        } else {
            self.palette.border
        };
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(self.title()),
            )
            .render(area, buf);
    }
}
