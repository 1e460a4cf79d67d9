//! Resource listing controller.
//!
//! Turns `(indexer, category, keyword, page)` into fetch tickets and applies
//! their results. Every accepted input change starts a new generation; only
//! the result of the latest generation is applied, so a slow response to an
//! older request can never overwrite a newer one.

use crate::model::{ResourcesPage, SearchQuery};
use tracing::debug;

/// A fetch the caller must perform and report back with
/// [`ResourceListController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation the result must be tagged with.
    pub generation: u64,
    /// Inputs of the fetch.
    pub query: SearchQuery,
}

/// Current resource page plus the bookkeeping needed to discard stale results.
#[derive(Debug, Clone, Default)]
pub struct ResourceListController {
    inputs: Option<SearchQuery>,
    generation: u64,
    page: Option<ResourcesPage>,
    loading: bool,
}

impl ResourceListController {
    /// No inputs, nothing displayed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed new inputs.
    ///
    /// Equal inputs (by value) are ignored. When indexer or category is missing
    /// the page becomes absent and no fetch is needed. Otherwise returns the
    /// ticket to fetch; the previous page stays displayed meanwhile.
    pub fn refresh(&mut self, query: &SearchQuery) -> Option<FetchTicket> {
        if self.inputs.as_ref() == Some(query) {
            return None;
        }
        self.inputs = Some(query.clone());
        self.issue()
    }

    /// Re-fetch the current inputs under a new generation.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        if self.inputs.is_none() {
            return None;
        }
        self.issue()
    }

    fn issue(&mut self) -> Option<FetchTicket> {
        self.generation += 1;
        let query = self.inputs.clone()?;
        if !query.is_fetchable() {
            self.page = None;
            self.loading = false;
            return None;
        }
        self.loading = true;
        debug!(generation = self.generation, query = %query.to_query_string(), "resource fetch issued");
        Some(FetchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a fetch result. `None` means the fetch failed.
    ///
    /// Returns `false` (and changes nothing) for a superseded generation.
    pub fn complete(&mut self, generation: u64, result: Option<ResourcesPage>) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "discarding stale resource page");
            return false;
        }
        self.page = result;
        self.loading = false;
        true
    }

    /// Displayed page, `None` while nothing is selected or after a failure.
    pub fn page(&self) -> Option<&ResourcesPage> {
        self.page.as_ref()
    }

    /// Total pages of the displayed page, 1 when absent.
    pub fn total_pages(&self) -> u32 {
        self.page.as_ref().map_or(1, ResourcesPage::total_pages)
    }

    /// True while the latest fetch has not completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inputs of the latest refresh.
    pub fn inputs(&self) -> Option<&SearchQuery> {
        self.inputs.as_ref()
    }

    /// Latest issued generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
