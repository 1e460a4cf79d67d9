//! Per-session memoization of category trees.
//!
//! Cache key is the indexer id. There is no eviction: the cache is bounded by
//! the number of distinct indexers visited in one session. Loads are
//! single-flight: while a tree is being fetched, further requests for the same
//! indexer are told to wait instead of fetching again.

use crate::model::{find_path, Category, CategoryId, CategoryPath, IndexerId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shared, immutable top-level category list of one indexer.
pub type CategoryTree = Arc<[Category]>;

/// Outcome of [`CategoryTreeIndex::get_or_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLookup {
    /// Tree already loaded.
    Ready(CategoryTree),
    /// Another load for this indexer is in flight; wait for its completion.
    Pending,
    /// Nothing cached: the caller must fetch and report back via
    /// [`CategoryTreeIndex::complete`] or [`CategoryTreeIndex::fail`].
    Load,
}

#[derive(Debug, Clone)]
enum TreeSlot {
    Loading,
    Loaded(CategoryTree),
}

/// Category trees memoized per indexer.
#[derive(Debug, Clone, Default)]
pub struct CategoryTreeIndex {
    slots: HashMap<IndexerId, TreeSlot>,
}

impl CategoryTreeIndex {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a tree, registering a load if none is cached or in flight.
    pub fn get_or_load(&mut self, indexer: &IndexerId) -> TreeLookup {
        match self.slots.get(indexer) {
            Some(TreeSlot::Loaded(tree)) => TreeLookup::Ready(Arc::clone(tree)),
            Some(TreeSlot::Loading) => TreeLookup::Pending,
            None => {
                debug!(indexer = %indexer, "category tree not cached, loading");
                self.slots.insert(indexer.clone(), TreeSlot::Loading);
                TreeLookup::Load
            }
        }
    }

    /// Loaded tree for `indexer`, if any.
    pub fn get(&self, indexer: &IndexerId) -> Option<CategoryTree> {
        match self.slots.get(indexer) {
            Some(TreeSlot::Loaded(tree)) => Some(Arc::clone(tree)),
            _ => None,
        }
    }

    /// True while a load for `indexer` is in flight.
    pub fn is_loading(&self, indexer: &IndexerId) -> bool {
        matches!(self.slots.get(indexer), Some(TreeSlot::Loading))
    }

    /// Store a fetched tree. Returns the shared copy.
    pub fn complete(&mut self, indexer: &IndexerId, categories: Vec<Category>) -> CategoryTree {
        let tree: CategoryTree = categories.into();
        self.slots
            .insert(indexer.clone(), TreeSlot::Loaded(Arc::clone(&tree)));
        tree
    }

    /// Forget an in-flight load that failed so the next selection retries.
    ///
    /// A loaded tree is never dropped by this call.
    pub fn fail(&mut self, indexer: &IndexerId) {
        if self.is_loading(indexer) {
            self.slots.remove(indexer);
        }
    }

    /// Number of loaded trees.
    pub fn loaded_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, TreeSlot::Loaded(_)))
            .count()
    }

    /// Resolve a category id against the loaded tree of `indexer`.
    ///
    /// `None` when the tree is not loaded or does not contain the id.
    pub fn find_path(&self, indexer: &IndexerId, target: &CategoryId) -> Option<CategoryPath> {
        self.get(indexer).and_then(|tree| find_path(&tree, target))
    }
}
