//! Category level menus.
//!
//! One list per displayed level, side by side. The category chosen at each
//! level is marked; the cursor is only highlighted in the focused level.

use crate::state::{AppState, Focus};
use crate::view::constants::CATEGORY_LEVEL_WIDTH;
use crate::view::format::truncate_to_width;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const CHOSEN_MARKER: &str = "● ";
const PLAIN_MARKER: &str = "  ";

/// Width the menu wants for `levels` columns.
pub fn preferred_width(levels: usize) -> u16 {
    CATEGORY_LEVEL_WIDTH.saturating_mul(levels.max(1) as u16)
}

/// Render all category levels of the selected indexer into `area`.
pub fn render_category_menu(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == Focus::Categories;
    let levels = state.facet().levels();

    if levels.is_empty() {
        let message = match state.facet().indexer() {
            Some(indexer) if state.trees().is_loading(indexer) => "Loading categories...",
            Some(_) => "No categories",
            None => "No indexer selected",
        };
        let block = pane_block(" Categories ", focused, palette);
        frame.render_widget(
            Paragraph::new(Line::styled(message, palette.muted)).block(block),
            area,
        );
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, levels.len() as u32); levels.len()])
        .split(area);

    for (level, entries) in levels.iter().enumerate() {
        let chosen = state.facet().path().get(level).map(|c| &c.id);
        let inner_width = columns[level].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = entries
            .iter()
            .map(|category| {
                let is_chosen = chosen == Some(&category.id);
                let (marker, style) = if is_chosen {
                    (CHOSEN_MARKER, palette.selected)
                } else {
                    (PLAIN_MARKER, Style::default())
                };
                let label = truncate_to_width(
                    &category.name,
                    inner_width.saturating_sub(marker.chars().count()),
                );
                ListItem::new(Line::from(vec![Span::raw(marker), Span::styled(label, style)]))
            })
            .collect();

        let level_focused = focused && level == state.focused_level();
        let title = if level == 0 {
            " Categories ".to_string()
        } else {
            format!(" Level {} ", level + 1)
        };
        let highlight = if level_focused {
            palette.cursor
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(pane_block(&title, level_focused, palette))
            .highlight_style(highlight);

        let mut list_state =
            ListState::default().with_selected(Some(state.level_cursor(level)));
        frame.render_stateful_widget(list, columns[level], &mut list_state);
    }
}

fn pane_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            palette.focused_border
        } else {
            palette.border
        })
        .title(title)
}
