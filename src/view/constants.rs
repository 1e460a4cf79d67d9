//! Layout dimension constants for TUI rendering.

/// Height of the indexer tab bar (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the keyword input (border + content).
pub const KEYWORD_INPUT_HEIGHT: u16 = 3;

/// Height of the footer with location and hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of one category level column.
pub const CATEGORY_LEVEL_WIDTH: u16 = 24;

/// Upper bound on result grid columns.
pub const MAX_RESULT_COLUMNS: usize = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
