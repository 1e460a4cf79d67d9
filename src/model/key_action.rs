//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement inside the focused pane
    /// Move selection up. Default: k/↑
    MoveUp,
    /// Move selection down. Default: j/↓
    MoveDown,
    /// Move to the previous tab / shallower category level. Default: h/←
    MoveLeft,
    /// Move to the next tab / deeper category level. Default: l/→
    MoveRight,
    /// Activate the highlighted indexer or category. Default: Enter/Space
    Select,

    // Focus navigation
    /// Focus the indexer tabs. Default: 1
    FocusIndexers,
    /// Focus the category menus. Default: 2
    FocusCategories,
    /// Focus the keyword input. Default: / or 3
    FocusKeyword,
    /// Focus the result cards. Default: 4
    FocusResults,
    /// Cycle focus: Indexers → Categories → Keyword → Results. Default: Tab
    CycleFocus,

    // Search
    /// Commit the current selection as a search (page resets to 1). Default: S
    Submit,

    // Pagination
    /// Go to the next result page. Default: n/]
    NextPage,
    /// Go to the previous result page. Default: p/[
    PrevPage,
    /// Go to the first result page. Default: g/Home
    FirstPage,
    /// Go to the last result page. Default: G/End
    LastPage,

    // History
    /// Navigate back in the location history. Default: b/Alt+←
    HistoryBack,
    /// Navigate forward in the location history. Default: f/Alt+→
    HistoryForward,

    // Resources
    /// Download the highlighted resource. Default: d
    Download,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Re-fetch the current result page. Default: r
    Refresh,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::NextPage,
            KeyAction::PrevPage,
            KeyAction::NextPage,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn history_actions_are_not_page_actions() {
        assert_ne!(KeyAction::HistoryBack, KeyAction::PrevPage);
        assert_ne!(KeyAction::HistoryForward, KeyAction::NextPage);
    }
}
