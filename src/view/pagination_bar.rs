//! One-line pagination bar.

use crate::state::PageMarker;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Pagination markers around the current page.
///
/// The current page is bracketed, disabled arrows are dimmed. Renders nothing
/// for an empty marker list (a single page).
pub struct PaginationBar<'a> {
    markers: &'a [PageMarker],
    current: u32,
    total: u32,
    palette: &'a Palette,
}

impl<'a> PaginationBar<'a> {
    /// Create new PaginationBar widget.
    pub fn new(markers: &'a [PageMarker], current: u32, total: u32, palette: &'a Palette) -> Self {
        Self {
            markers,
            current,
            total,
            palette,
        }
    }

    /// Text-only form of the bar.
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.markers.len() * 2);
        for (i, marker) in self.markers.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let span = if marker.is_active(self.current) {
                Span::styled(format!("[{}]", marker.label()), self.palette.selected)
            } else if !marker.is_enabled(self.current, self.total) {
                Span::styled(
                    marker.label(),
                    self.palette.muted.add_modifier(Modifier::DIM),
                )
            } else {
                Span::raw(marker.label())
            };
            spans.push(span);
        }
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.markers.is_empty() {
            return;
        }
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
