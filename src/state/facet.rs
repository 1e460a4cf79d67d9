//! Faceted selection state machine.
//!
//! Owns the selected indexer, the selected category path, the per-level
//! category lists shown to the user, the keyword and the current page. It is
//! the single writer of the path and the displayed levels.
//!
//! Invariants:
//! - `levels[0]` is the top-level list of the current indexer's tree
//! - `levels[i]` (i > 0) is `path[i-1].sub_categories`, present only if non-empty
//! - `levels.len() == path.len() + 1`, or `path.len()` when the last selection is a leaf
//! - an empty or not-yet-loaded tree shows no levels at all

use crate::model::{find_path, Category, CategoryId, CategoryPath, IndexerId, SearchQuery};
use tracing::debug;

/// Selection state: `(indexer, path, levels, keyword, page)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSelectionState {
    indexer: Option<IndexerId>,
    path: CategoryPath,
    levels: Vec<Vec<Category>>,
    keyword: String,
    page: u32,
}

impl Default for FacetSelectionState {
    fn default() -> Self {
        Self {
            indexer: None,
            path: CategoryPath::new(),
            levels: Vec::new(),
            keyword: String::new(),
            page: 1,
        }
    }
}

impl FacetSelectionState {
    /// Nothing selected, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected indexer.
    pub fn indexer(&self) -> Option<&IndexerId> {
        self.indexer.as_ref()
    }

    /// Selected category path, root-first.
    pub fn path(&self) -> &CategoryPath {
        &self.path
    }

    /// Category lists currently displayed, one per visible depth.
    pub fn levels(&self) -> &[Vec<Category>] {
        &self.levels
    }

    /// Current keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Current 1-based page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Id of the deepest selected category.
    pub fn category_id(&self) -> Option<&CategoryId> {
        self.path.leaf().map(|c| &c.id)
    }

    /// Projection used for the location and for fetching.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(
            self.indexer.clone(),
            self.category_id().cloned(),
            self.keyword.clone(),
            self.page,
        )
    }

    /// Switch indexer.
    ///
    /// No-op (returns `false`) if `indexer` is already selected. Otherwise the
    /// path is cleared and the levels show `tree`, or nothing until
    /// [`apply_tree`](Self::apply_tree) delivers it. `page` is left alone:
    /// resetting it is up to whoever submits the next search.
    pub fn set_indexer(&mut self, indexer: IndexerId, tree: Option<&[Category]>) -> bool {
        if self.indexer.as_ref() == Some(&indexer) {
            return false;
        }
        debug!(indexer = %indexer, tree_ready = tree.is_some(), "indexer changed");
        self.indexer = Some(indexer);
        self.path = CategoryPath::new();
        self.levels = top_level(tree.unwrap_or_default());
        true
    }

    /// Install a tree that finished loading for `indexer`.
    ///
    /// Ignored (returns `false`) if another indexer has been selected since the
    /// load started, or if the path is already populated.
    pub fn apply_tree(&mut self, indexer: &IndexerId, tree: &[Category]) -> bool {
        if self.indexer.as_ref() != Some(indexer) || !self.path.is_empty() {
            return false;
        }
        self.levels = top_level(tree);
        true
    }

    /// Select `category` at depth `level`.
    ///
    /// Every selection deeper than `level` is discarded, then the children of
    /// `category` (if any) become the next displayed level. Re-selecting the
    /// same category yields the same state.
    ///
    /// Rejected as a no-op (returns `false`) when `level` skips past the
    /// current path or `category` is not listed at that level.
    pub fn select_category_at_level(&mut self, level: usize, category: Category) -> bool {
        let listed = self
            .levels
            .get(level)
            .is_some_and(|entries| entries.iter().any(|c| c.id == category.id));
        if level > self.path.len() || !listed {
            debug!(level, category = %category.id, "ignoring selection outside displayed levels");
            return false;
        }

        self.path.truncate(level);
        self.levels.truncate(level + 1);
        if !category.is_leaf() {
            self.levels.push(category.sub_categories.clone());
        }
        self.path.push(category);
        true
    }

    /// Replace the keyword. Does not navigate.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Commit the current selection as a new search on page 1.
    ///
    /// This is the only transition that resets `page`.
    pub fn submit(&mut self) -> SearchQuery {
        self.page = 1;
        self.query()
    }

    /// Move to page `page` if `1 <= page <= total_pages`.
    ///
    /// Out-of-range requests are ignored and return `None`.
    pub fn set_page(&mut self, page: u32, total_pages: u32) -> Option<SearchQuery> {
        if page < 1 || page > total_pages {
            return None;
        }
        self.page = page;
        Some(self.query())
    }

    /// Load state from a deserialized location.
    ///
    /// `tree` is the loaded tree of `query.indexer` (or `None` if unavailable).
    /// The category is resolved with [`find_path`]; an unknown id falls back
    /// to no selection with the top level displayed.
    pub fn restore(&mut self, query: &SearchQuery, tree: Option<&[Category]>) {
        self.indexer = query.indexer.clone();
        self.keyword = query.keyword.clone();
        self.page = query.page.max(1);

        let tree = tree.unwrap_or_default();
        let resolved = query
            .category
            .as_ref()
            .and_then(|id| find_path(tree, id));
        if query.category.is_some() && resolved.is_none() {
            debug!(category = ?query.category, "category not in tree, selecting none");
        }

        self.path = resolved.unwrap_or_default();
        self.levels = levels_for(tree, &self.path);
    }
}

fn top_level(tree: &[Category]) -> Vec<Vec<Category>> {
    if tree.is_empty() {
        Vec::new()
    } else {
        vec![tree.to_vec()]
    }
}

/// Displayed levels implied by a valid path through `tree`.
fn levels_for(tree: &[Category], path: &CategoryPath) -> Vec<Vec<Category>> {
    let mut levels = top_level(tree);
    if levels.is_empty() {
        return levels;
    }
    for selected in path.iter() {
        if selected.is_leaf() {
            break;
        }
        levels.push(selected.sub_categories.clone());
    }
    levels
}

#[cfg(test)]
#[path = "facet_tests.rs"]
mod tests;
