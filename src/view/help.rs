//! Help overlay widget displaying keyboard shortcuts.
//!
//! Centered modal listing the default bindings by group. Toggled by `?`,
//! dismissed by `Esc`.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("h/j/k/l, arrows", "Move within the focused pane"),
            ("Enter/Space", "Select category, submit keyword, download card"),
            ("Tab", "Cycle focus"),
            ("1 2 3 4", "Focus indexers, categories, keyword, results"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Edit keyword"),
            ("Shift+S, Ctrl+S", "Submit search (page 1)"),
            ("Esc", "Leave keyword box"),
        ],
    ),
    (
        "Pages",
        &[
            ("n ] PgDn", "Next page"),
            ("p [ PgUp", "Previous page"),
            ("g/Home, G/End", "First / last page"),
        ],
    ),
    (
        "History",
        &[
            ("b, Alt+←", "Back"),
            ("f, Alt+→", "Forward"),
        ],
    ),
    (
        "Application",
        &[
            ("d", "Download highlighted resource"),
            ("r/F5", "Reload"),
            ("?", "Toggle this help"),
            ("q, Ctrl+C", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let key_width = SECTIONS
        .iter()
        .flat_map(|(_, rows)| rows.iter())
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines = Vec::new();
    for (i, (title, rows)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(*title, palette.header));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<key_width$}"), palette.key),
                Span::styled(*description, Style::default()),
            ]));
        }
    }
    lines
}
