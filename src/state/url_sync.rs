//! Bidirectional sync between the selection and the location history.
//!
//! Serialization (state → location) happens only for committed searches
//! (submit and page changes). Browsing the category tree or typing a keyword
//! never writes history. Deserialization (location → state) happens on start-up
//! and on every back/forward navigation; afterwards the current entry is
//! replaced by its canonical form so that every reachable entry round-trips.

use crate::model::SearchQuery;
use tracing::{debug, info};

/// The environment's navigation primitive: a current location plus push and
/// replace operations.
pub trait Navigator {
    /// Location of the current entry (a query string).
    fn current(&self) -> &str;
    /// Add a new entry after the current one, dropping forward entries.
    fn push(&mut self, location: String);
    /// Overwrite the current entry.
    fn replace(&mut self, location: String);
}

/// In-process history stack with back/forward navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
    index: usize,
}

impl SessionHistory {
    /// History with a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Step back; returns the new current location.
    pub fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward; returns the new current location.
    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// True if [`back`](Self::back) would move.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// True if [`forward`](Self::forward) would move.
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: history holds at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl Navigator for SessionHistory {
    fn current(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, location: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, location: String) {
        self.entries[self.index] = location;
    }
}

/// What a serialization did to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryWrite {
    /// A new entry was pushed.
    Pushed,
    /// The current entry was overwritten.
    Replaced,
    /// The location was already current; nothing written.
    Unchanged,
}

/// Adapter between [`SearchQuery`] and a [`Navigator`].
#[derive(Debug, Clone, Default)]
pub struct UrlSync<N: Navigator = SessionHistory> {
    navigator: N,
}

impl<N: Navigator> UrlSync<N> {
    /// Wrap a navigator.
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Current location string.
    pub fn location(&self) -> &str {
        self.navigator.current()
    }

    /// Deserialize the current location.
    pub fn current_query(&self) -> SearchQuery {
        SearchQuery::parse(self.navigator.current())
    }

    /// Serialize a committed search: push if it differs from the current entry.
    pub fn commit(&mut self, query: &SearchQuery) -> HistoryWrite {
        let location = query.to_query_string();
        if location == self.navigator.current() {
            debug!(location = %location, "location unchanged");
            return HistoryWrite::Unchanged;
        }
        info!(location = %location, "history push");
        self.navigator.push(location);
        HistoryWrite::Pushed
    }

    /// Rewrite the current entry to the serialization of a restored state.
    pub fn canonicalize(&mut self, query: &SearchQuery) -> HistoryWrite {
        let location = query.to_query_string();
        if location == self.navigator.current() {
            return HistoryWrite::Unchanged;
        }
        debug!(from = %self.navigator.current(), to = %location, "history replace");
        self.navigator.replace(location);
        HistoryWrite::Replaced
    }

    /// Borrow the navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Borrow the navigator mutably.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

impl UrlSync<SessionHistory> {
    /// Navigate back; returns the query to deserialize.
    pub fn back(&mut self) -> Option<SearchQuery> {
        self.navigator.back().map(SearchQuery::parse)
    }

    /// Navigate forward; returns the query to deserialize.
    pub fn forward(&mut self) -> Option<SearchQuery> {
        self.navigator.forward().map(SearchQuery::parse)
    }
}

#[cfg(test)]
#[path = "url_sync_tests.rs"]
mod tests;
