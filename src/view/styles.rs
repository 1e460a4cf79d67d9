//! Color configuration and the palette used by every widget.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then `NO_COLOR` (any value), otherwise colors are on.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Fixed setting, independent of the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for the browser panes.
///
/// With colors disabled every style keeps its modifiers (bold, reversed) but
/// drops foreground and background colors, so selection stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Border of the pane holding focus.
    pub focused_border: Style,
    /// Border of other panes.
    pub border: Style,
    /// Highlighted row / card under the cursor.
    pub cursor: Style,
    /// Selected (committed) entry, e.g. active indexer or chosen category.
    pub selected: Style,
    /// Secondary text.
    pub muted: Style,
    /// Category badge.
    pub category: Style,
    /// Size badge.
    pub size: Style,
    /// Resolution and seeders.
    pub info: Style,
    /// Free-download badge.
    pub free: Style,
    /// Age badge for resources younger than a week.
    pub recent: Style,
    /// Section headers in the help overlay.
    pub header: Style,
    /// Key names in the help overlay.
    pub key: Style,
}

impl Palette {
    /// Palette honoring `config`.
    pub fn new(config: ColorConfig) -> Self {
        let palette = Self {
            focused_border: Style::default().fg(Color::Cyan),
            border: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            selected: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Gray),
            category: Style::default().fg(Color::Blue),
            size: Style::default().fg(Color::Magenta),
            info: Style::default().fg(Color::Cyan),
            free: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            recent: Style::default().fg(Color::LightRed),
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };

        if config.colors_enabled() {
            palette
        } else {
            palette.without_colors()
        }
    }

    fn without_colors(self) -> Self {
        let strip = |style: Style| Style {
            fg: None,
            bg: None,
            ..style
        };
        Self {
            focused_border: strip(self.focused_border).add_modifier(Modifier::BOLD),
            border: strip(self.border),
            cursor: strip(self.cursor),
            selected: strip(self.selected),
            muted: strip(self.muted),
            category: strip(self.category),
            size: strip(self.size),
            info: strip(self.info),
            free: strip(self.free),
            recent: strip(self.recent).add_modifier(Modifier::UNDERLINED),
            header: strip(self.header),
            key: strip(self.key),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::with_colors(true))
    }
}
