//! Snapshot tests for key view components
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.

use chrono::{DateTime, TimeZone, Utc};
use idxview::fetch::FetchEvent;
use idxview::integration::apply_event;
use idxview::model::{Category, CategoryId, IndexerId, Resource, ResourcesPage};
use idxview::state::{window, AppState, Effect, Focus, KeywordInput};
use idxview::view::keyword_box::KeywordBox;
use idxview::view::pagination_bar::PaginationBar;
use idxview::view::{render_layout, ColorConfig, Palette, ViewConfig};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string, dropping empty trailing lines.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap()
}

fn plain() -> Palette {
    Palette::new(ColorConfig::with_colors(false))
}

fn resources_page() -> ResourcesPage {
    let created = now().timestamp() - 3 * 24 * 3600;
    serde_json::from_value(serde_json::json!({
        "pagination": {"page": 1, "totalPages": 12, "pageSize": 2, "total": 24},
        "resources": [
            {"id": "1", "title": "Frieren 01", "title2": "Sousou no Frieren", "createdDate": created,
             "category": "Anime", "size": 1_610_612_736u64, "resolution": "1080p", "seeders": 120,
             "leechers": 4, "free": true, "labels": ["HEVC"]},
            {"id": "2", "title": "Dungeon Meshi 05", "createdDate": created - 30 * 24 * 3600,
             "category": "Anime", "size": 734_003_200u64, "seeders": 8}
        ]
    }))
    .unwrap()
}

/// Browser after loading indexers, a tree and the first results page.
fn loaded_browser() -> AppState {
    let nyaa = IndexerId::new("nyaa").unwrap();
    let mut state = AppState::new("indexer=nyaa&category=1_2");
    state.start();
    apply_event(
        &mut state,
        FetchEvent::IndexersLoaded(vec![nyaa.clone(), IndexerId::new("dmhy").unwrap()]),
    );
    let effects = apply_event(
        &mut state,
        FetchEvent::CategoriesLoaded {
            indexer: nyaa,
            tree: Some(vec![
                Category::new(
                    CategoryId::new("1").unwrap(),
                    "Anime",
                    vec![Category::new(CategoryId::new("1_2").unwrap(), "English", vec![])],
                ),
                Category::new(CategoryId::new("2").unwrap(), "Music", vec![]),
            ]),
        },
    );
    let generation = effects
        .iter()
        .find_map(|e| match e {
            Effect::FetchResources(ticket) => Some(ticket.generation),
            _ => None,
        })
        .expect("restored location fetches resources");
    state.resources_loaded(generation, Some(resources_page()));
    state
}

fn render_screen(state: &AppState, width: u16, height: u16) -> String {
    let config = ViewConfig {
        card_width: 36,
        palette: plain(),
    };
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &config, now()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

// ===== One-line widgets =====

#[test]
fn pagination_bar_middle_page() {
    let markers = window(6, 12, 5);
    let palette = plain();
    let line = PaginationBar::new(&markers, 6, 12, &palette).line();
    insta::assert_snapshot!(line.to_string(), @"« 4 5 [6] 7 8 »");
}

#[test]
fn keyword_box_unfocused_with_text() {
    let input = KeywordInput::new("frieren");
    let palette = plain();
    let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(KeywordBox::new(&input, "frieren", false, &palette), frame.area()))
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    let content_row = text.lines().nth(1).unwrap();
    insta::assert_snapshot!(content_row, @"│frieren                     │");
}

// ===== Full screen =====

#[test]
fn full_screen_shows_all_panes() {
    let state = loaded_browser();
    let text = render_screen(&state, 120, 30);

    assert!(text.contains("nyaa"));
    assert!(text.contains("dmhy"));
    assert!(text.contains("● Anime"));
    assert!(text.contains("● English"));
    assert!(text.contains("Results (24 total, page 1/12)"));
    assert!(text.contains("[1] 2 3 4 5 »"));
    assert!(text.contains("Frieren 01"));
    assert!(text.contains("Sousou no Frieren"));
    assert!(text.contains("1.5 GB"));
    assert!(text.contains("3 days ago"));
    assert!(text.contains("HEVC"));
    assert!(text.contains("Dungeon Meshi 05"));
    assert!(text.contains("2024-04-17"));
    assert!(text.contains("/?indexer=nyaa&category=1_2"));
}

#[test]
fn footer_line_snapshot() {
    let state = loaded_browser();
    let text = render_screen(&state, 120, 30);
    let footer = text.lines().last().unwrap();
    insta::assert_snapshot!(footer, @"/?indexer=nyaa&category=1_2  ? help · Tab focus · / search · b/f history · q quit");
}

#[test]
fn cards_are_dealt_row_first() {
    let mut state = loaded_browser();
    state.focus = Focus::Results;
    // Results pane is wide enough for three cards.
    let text = render_screen(&state, 160, 30);

    let row = text
        .lines()
        .find(|l| l.contains("Frieren 01"))
        .expect("first card title row");
    assert!(row.contains("Dungeon Meshi 05"), "second resource shares the first row");
}

#[test]
fn narrow_terminal_uses_single_column() {
    let state = loaded_browser();
    let text = render_screen(&state, 60, 40);

    let same_row = text
        .lines()
        .any(|l| l.contains("Frieren 01") && l.contains("Dungeon Meshi 05"));
    assert!(!same_row);
}

#[test]
fn missing_page_shows_empty_state() {
    let state = AppState::new("");
    let text = render_screen(&state, 80, 20);
    assert!(text.contains("No resources found or loading..."));
    assert!(text.contains("Indexers (loading...)"));
}

#[test]
fn untitled_resource_gets_placeholder_title() {
    let mut state = loaded_browser();
    let untitled: Resource =
        serde_json::from_value(serde_json::json!({"id": "x", "title": ""})).unwrap();
    let page = ResourcesPage {
        resources: vec![untitled],
        ..resources_page()
    };
    state.reload();
    state.resources_loaded(state.resources().generation(), Some(page));

    assert!(render_screen(&state, 120, 30).contains("Untitled Resource"));
}
