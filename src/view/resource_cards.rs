//! Masonry grid of resource cards.
//!
//! Resources are dealt row-first into columns (`index % columns`), and each
//! column stacks its cards top to bottom with their natural heights.

use crate::model::Resource;
use crate::view::constants::MAX_RESULT_COLUMNS;
use crate::view::format::{format_bytes, format_created_date, is_recent, truncate_to_width};
use crate::view::styles::Palette;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown when the page is absent or has no resources.
pub const EMPTY_TEXT: &str = "No resources found or loading...";

const UNTITLED: &str = "Untitled Resource";

/// Number of grid columns for an area `width` wide.
///
/// One column per `card_width` cells, between 1 and 5.
pub fn column_count(width: u16, card_width: u16) -> usize {
    let per_card = card_width.max(1);
    usize::from(width / per_card).clamp(1, MAX_RESULT_COLUMNS)
}

/// Resource indices per column, dealt row-first.
pub fn distribute(count: usize, columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut dealt = vec![Vec::new(); columns];
    for index in 0..count {
        dealt[index % columns].push(index);
    }
    dealt
}

/// Everything a card grid needs besides the frame.
pub struct CardGrid<'a> {
    /// Resources in display order.
    pub resources: &'a [Resource],
    /// Highlighted resource, if the results pane has focus.
    pub cursor: Option<usize>,
    /// Target card width.
    pub card_width: u16,
    /// Reference time for ages.
    pub now: DateTime<Utc>,
    /// Styles.
    pub palette: &'a Palette,
}

impl CardGrid<'_> {
    /// Render the grid into `area`.
    ///
    /// Rows above the cursor are skipped when the cursor's card would not fit.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.resources.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled(EMPTY_TEXT, self.palette.muted)),
                area,
            );
            return;
        }

        let columns = column_count(area.width, self.card_width);
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(area);
        let inner_width = column_areas[0].width.saturating_sub(2) as usize;

        let cards: Vec<Vec<Line>> = self
            .resources
            .iter()
            .enumerate()
            .map(|(index, resource)| self.card_lines(resource, inner_width, self.cursor == Some(index)))
            .collect();
        let first_row = self.first_visible_row(&cards, columns, area.height);

        for (column, indices) in distribute(cards.len(), columns).into_iter().enumerate() {
            let column_area = column_areas[column];
            let mut y = column_area.y;
            let bottom = column_area.y + column_area.height;

            for index in indices.into_iter().skip(first_row) {
                if y >= bottom {
                    break;
                }
                let height = card_height(&cards[index]).min(bottom - y);
                let card_area = Rect::new(column_area.x, y, column_area.width, height);
                let border_style = if self.cursor == Some(index) {
                    self.palette.focused_border
                } else {
                    self.palette.border
                };
                let card = Paragraph::new(cards[index].clone()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
                frame.render_widget(card, card_area);
                y += height;
            }
        }
    }

    /// Smallest row offset that keeps the cursor's card fully visible.
    fn first_visible_row(&self, cards: &[Vec<Line>], columns: usize, height: u16) -> usize {
        let Some(cursor) = self.cursor.filter(|&c| c < cards.len()) else {
            return 0;
        };
        let cursor_row = cursor / columns;
        let column = cursor % columns;

        (0..=cursor_row)
            .find(|&first| {
                let used: u32 = (first..=cursor_row)
                    .map(|row| u32::from(card_height(&cards[row * columns + column])))
                    .sum();
                used <= u32::from(height)
            })
            .unwrap_or(cursor_row)
    }

    fn card_lines(&self, resource: &Resource, width: usize, highlighted: bool) -> Vec<Line<'static>> {
        let palette = self.palette;
        let mut lines = Vec::new();

        let title = if resource.title.is_empty() {
            UNTITLED
        } else {
            resource.title.as_str()
        };
        let title_style = if highlighted {
            palette.cursor.add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::styled(truncate_to_width(title, width), title_style));

        if !resource.title2.is_empty() {
            lines.push(Line::styled(
                truncate_to_width(&resource.title2, width),
                palette.muted,
            ));
        }

        let mut badges = vec![
            Span::styled(format!("[{}]", resource.category), palette.category),
            Span::raw(" "),
            Span::styled(format_bytes(resource.size, 2), palette.size),
        ];
        if !resource.resolution.is_empty() {
            badges.push(Span::raw(" "));
            badges.push(Span::styled(resource.resolution.clone(), palette.info));
        }
        if resource.free {
            badges.push(Span::raw(" "));
            badges.push(Span::styled("Free", palette.free));
        }
        lines.push(Line::from(badges));

        let age_style = if is_recent(resource.created_date, self.now) {
            palette.recent
        } else {
            palette.muted
        };
        lines.push(Line::from(vec![
            Span::styled(format_created_date(resource.created_date, self.now), age_style),
            Span::raw("  "),
            Span::styled(format!("↑{}", resource.seeders), palette.info),
            Span::raw(" "),
            Span::styled(format!("↓{}", resource.leechers), palette.muted),
        ]));

        if !resource.labels.is_empty() {
            lines.push(Line::styled(
                truncate_to_width(&resource.labels.join(" · "), width),
                palette.muted,
            ));
        }

        lines
    }
}

fn card_height(lines: &[Line]) -> u16 {
    (lines.len() as u16).saturating_add(2)
}
