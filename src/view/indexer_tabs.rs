//! Indexer tab bar.
//!
//! One tab per indexer, the selected indexer highlighted.

use crate::model::IndexerId;
use crate::view::styles::Palette;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the indexer tab bar.
///
/// Out-of-bounds or missing selections render without highlight. An empty
/// indexer list shows a placeholder title.
pub fn render_indexer_tabs(
    frame: &mut Frame,
    area: Rect,
    indexers: &[IndexerId],
    selected: Option<usize>,
    focused: bool,
    palette: &Palette,
) {
    let border_style = if focused {
        palette.focused_border
    } else {
        palette.border
    };
    let title = if indexers.is_empty() {
        " Indexers (loading...) "
    } else {
        " Indexers "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let titles: Vec<Line> = indexers.iter().map(|id| Line::from(id.as_str())).collect();
    let mut tabs = Tabs::new(titles).block(block);

    // Tabs always highlights something; leave the style plain when nothing is selected.
    match selected.filter(|&idx| idx < indexers.len()) {
        Some(idx) => tabs = tabs.highlight_style(palette.selected).select(idx),
        None => tabs = tabs.highlight_style(ratatui::style::Style::default()),
    }

    frame.render_widget(tabs, area);
}
