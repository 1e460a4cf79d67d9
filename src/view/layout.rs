//! Screen layout.
//!
//! Indexer tabs and keyword box on top, category menus left of the result
//! grid, footer with the current location. Pure with respect to the state:
//! everything is read from [`AppState`].

use crate::state::{AppState, Focus};
use crate::view::constants::{KEYWORD_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::{
    category_menu, help, indexer_tabs, keyword_box::KeywordBox, pagination_bar::PaginationBar,
    resource_cards::{self, CardGrid},
    styles::Palette,
};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rendering settings that do not live in the state.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// Target width of one result card.
    pub card_width: u16,
    /// Styles.
    pub palette: Palette,
}

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Indexer tabs.
    pub tabs: Rect,
    /// Keyword box.
    pub keyword: Rect,
    /// Category menus.
    pub categories: Rect,
    /// Results pane, borders included.
    pub results: Rect,
    /// Footer.
    pub status: Rect,
}

/// Split `area` for the current state.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(KEYWORD_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let menu_width = category_menu::preferred_width(state.facet().levels().len())
        .min(rows[2].width.saturating_mul(2) / 5);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(menu_width), Constraint::Min(0)])
        .split(rows[2]);

    ScreenAreas {
        tabs: rows[0],
        keyword: rows[1],
        categories: body[0],
        results: body[1],
        status: rows[3],
    }
}

/// Grid columns the results pane shows in `area`.
pub fn result_columns(area: Rect, state: &AppState, card_width: u16) -> usize {
    let results = calculate_areas(area, state).results;
    resource_cards::column_count(results.width.saturating_sub(2), card_width)
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, config: &ViewConfig, now: DateTime<Utc>) {
    let areas = calculate_areas(frame.area(), state);
    let palette = &config.palette;

    indexer_tabs::render_indexer_tabs(
        frame,
        areas.tabs,
        state.indexers(),
        state.selected_indexer_index(),
        state.focus == Focus::Indexers,
        palette,
    );
    frame.render_widget(
        KeywordBox::new(
            state.keyword_input(),
            state.facet().keyword(),
            state.focus == Focus::Keyword,
            palette,
        ),
        areas.keyword,
    );
    category_menu::render_category_menu(frame, areas.categories, state, palette);
    render_results(frame, areas.results, state, config, now);
    render_status_bar(frame, areas.status, state, palette);

    if state.help_visible {
        help::render_help_overlay(frame, palette);
    }
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    config: &ViewConfig,
    now: DateTime<Utc>,
) {
    let palette = &config.palette;
    let focused = state.focus == Focus::Results;
    let total = state.resources().total_pages();
    let current = state.facet().page();

    let mut title = match state.resources_page() {
        Some(page) => format!(
            " Results ({} total, page {}/{}) ",
            page.pagination.total, current, total
        ),
        None => " Results ".to_string(),
    };
    if state.resources().is_loading() {
        title.push_str("[loading] ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            palette.focused_border
        } else {
            palette.border
        })
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let markers = state.pagination_window();
    let bar_height = u16::from(!markers.is_empty());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(bar_height),
            Constraint::Min(0),
            Constraint::Length(bar_height),
        ])
        .split(inner);

    if !markers.is_empty() {
        frame.render_widget(PaginationBar::new(&markers, current, total, palette), rows[0]);
        frame.render_widget(PaginationBar::new(&markers, current, total, palette), rows[2]);
    }

    let resources = state
        .resources_page()
        .map_or(&[][..], |page| page.resources.as_slice());
    CardGrid {
        resources,
        cursor: focused.then(|| state.result_cursor()),
        card_width: config.card_width,
        now,
        palette,
    }
    .render(frame, rows[1]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let location = if state.location().is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", state.location())
    };

    let mut spans = vec![Span::styled(location, palette.selected)];
    if let Some(status) = state.status() {
        spans.push(Span::raw("  "));
        spans.push(Span::raw(status.to_string()));
    }
    spans.push(Span::styled(
        "  ? help · Tab focus · / search · b/f history · q quit",
        palette.muted,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
