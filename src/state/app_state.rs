//! Application state and transitions.
//!
//! AppState composes the selection state machine, the category cache, the
//! location history and the resource controller. Transitions are pure: they
//! mutate the state and return the [`Effect`]s the shell must execute. Results
//! of those effects come back through [`crate::integration::apply_event`].

use crate::model::{
    Category, IndexerId, KeyAction, Resource, ResourceId, ResourcesPage, SearchQuery,
};
use crate::state::category_tree::{CategoryTree, CategoryTreeIndex, TreeLookup};
use crate::state::facet::FacetSelectionState;
use crate::state::keyword_input::{self, KeywordInput};
use crate::state::pagination::{self, PageMarker};
use crate::state::resource_list::{FetchTicket, ResourceListController};
use crate::state::url_sync::{SessionHistory, UrlSync};
use std::sync::Arc;
use tracing::{debug, info};

// ===== Effect =====

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the indexer list.
    LoadIndexers,
    /// Fetch the category tree of an indexer.
    LoadCategories(IndexerId),
    /// Fetch one resource page.
    FetchResources(FetchTicket),
    /// Fire-and-forget download request.
    Download {
        /// Indexer owning the resource.
        indexer: IndexerId,
        /// Resource to download.
        resource: ResourceId,
    },
}

// ===== Focus =====

/// Which pane receives keyboard input.
///
/// Cycles Indexers → Categories → Keyword → Results → Indexers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Indexer tabs.
    Indexers,
    /// Category level menus.
    #[default]
    Categories,
    /// Keyword text box.
    Keyword,
    /// Result cards.
    Results,
}

impl Focus {
    /// Next pane in cycle order.
    pub fn next(self) -> Self {
        match self {
            Focus::Indexers => Focus::Categories,
            Focus::Categories => Focus::Keyword,
            Focus::Keyword => Focus::Results,
            Focus::Results => Focus::Indexers,
        }
    }
}

// ===== AppState =====

/// Root UI state. Pure data, no I/O.
#[derive(Debug, Clone)]
pub struct AppState {
    indexers: Vec<IndexerId>,
    facet: FacetSelectionState,
    trees: CategoryTreeIndex,
    url: UrlSync<SessionHistory>,
    resources: ResourceListController,
    /// Location waiting for its indexer's category tree before it can be restored.
    pending_restore: Option<SearchQuery>,
    keyword_input: KeywordInput,

    /// Pane with keyboard focus.
    pub focus: Focus,
    /// Whether the help overlay is shown.
    pub help_visible: bool,

    focused_level: usize,
    level_cursors: Vec<usize>,
    result_cursor: usize,
    result_columns: usize,
    max_visible_pages: u32,
    status: Option<String>,
}

impl AppState {
    /// State positioned on `initial_location`; nothing is loaded until [`start`](Self::start).
    pub fn new(initial_location: &str) -> Self {
        Self {
            indexers: Vec::new(),
            facet: FacetSelectionState::new(),
            trees: CategoryTreeIndex::new(),
            url: UrlSync::new(SessionHistory::new(initial_location)),
            resources: ResourceListController::new(),
            pending_restore: None,
            keyword_input: KeywordInput::default(),
            focus: Focus::default(),
            help_visible: false,
            focused_level: 0,
            level_cursors: Vec::new(),
            result_cursor: 0,
            result_columns: 1,
            max_visible_pages: pagination::DEFAULT_MAX_VISIBLE,
            status: None,
        }
    }

    /// Set the pagination window width (at least 1).
    pub fn with_max_visible_pages(mut self, max_visible: u32) -> Self {
        self.max_visible_pages = max_visible.max(1);
        self
    }

    // ----- accessors -----

    /// Known indexers, in server order.
    pub fn indexers(&self) -> &[IndexerId] {
        &self.indexers
    }

    /// Selection state.
    pub fn facet(&self) -> &FacetSelectionState {
        &self.facet
    }

    /// Category cache.
    pub fn trees(&self) -> &CategoryTreeIndex {
        &self.trees
    }

    /// Location history.
    pub fn url(&self) -> &UrlSync<SessionHistory> {
        &self.url
    }

    /// Current location string.
    pub fn location(&self) -> &str {
        self.url.location()
    }

    /// Resource controller.
    pub fn resources(&self) -> &ResourceListController {
        &self.resources
    }

    /// Displayed resource page.
    pub fn resources_page(&self) -> Option<&ResourcesPage> {
        self.resources.page()
    }

    /// Keyword being edited.
    pub fn keyword_input(&self) -> &KeywordInput {
        &self.keyword_input
    }

    /// Location waiting for a category tree, if any.
    pub fn pending_restore(&self) -> Option<&SearchQuery> {
        self.pending_restore.as_ref()
    }

    /// Category level holding the menu cursor.
    pub fn focused_level(&self) -> usize {
        self.focused_level
    }

    /// Highlighted row of category level `level`.
    pub fn level_cursor(&self, level: usize) -> usize {
        self.level_cursors.get(level).copied().unwrap_or(0)
    }

    /// Highlighted result card index.
    pub fn result_cursor(&self) -> usize {
        self.result_cursor
    }

    /// Highlighted resource.
    pub fn selected_resource(&self) -> Option<&Resource> {
        self.resources
            .page()
            .and_then(|page| page.resources.get(self.result_cursor))
    }

    /// Index of the selected indexer in [`indexers`](Self::indexers).
    pub fn selected_indexer_index(&self) -> Option<usize> {
        let selected = self.facet.indexer()?;
        self.indexers.iter().position(|id| id == selected)
    }

    /// Last status message (downloads).
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Pagination markers for the current page.
    pub fn pagination_window(&self) -> Vec<PageMarker> {
        pagination::window(
            self.facet.page(),
            self.resources.total_pages(),
            self.max_visible_pages,
        )
    }

    /// Record the grid width used for vertical cursor movement.
    pub fn set_result_columns(&mut self, columns: usize) {
        self.result_columns = columns.max(1);
    }

    // ----- lifecycle -----

    /// Initial effects: load indexers and restore the initial location.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::LoadIndexers];
        let query = self.url.current_query();
        effects.extend(self.restore(query));
        effects
    }

    /// Indexer list arrived (empty on failure).
    ///
    /// If nothing is selected yet, the first indexer is chosen and the current
    /// location is rewritten to include it.
    pub fn indexers_loaded(&mut self, indexers: Vec<IndexerId>) -> Vec<Effect> {
        info!(count = indexers.len(), "indexers loaded");
        self.indexers = indexers;
        if self.facet.indexer().is_some() || self.pending_restore.is_some() {
            return Vec::new();
        }
        let Some(first) = self.indexers.first().cloned() else {
            return Vec::new();
        };
        let effects = self.choose_indexer(first);
        self.url.canonicalize(&self.facet.query());
        effects
    }

    /// Category tree load finished; `None` means it failed.
    ///
    /// A location waiting on this tree is restored and canonicalized. If the
    /// load failed it stays pending, untouched, until a reload fetches the
    /// tree again.
    pub fn categories_loaded(
        &mut self,
        indexer: IndexerId,
        categories: Option<Vec<Category>>,
    ) -> Vec<Effect> {
        let loaded = categories.is_some();
        let tree: CategoryTree = match categories {
            Some(categories) => self.trees.complete(&indexer, categories),
            None => {
                self.trees.fail(&indexer);
                Arc::from(Vec::new())
            }
        };

        let waiting = self
            .pending_restore
            .as_ref()
            .is_some_and(|query| query.indexer.as_ref() == Some(&indexer));
        if waiting && !loaded {
            // The location stays as written; a reload retries the restore.
            debug!(indexer = %indexer, "tree failed, restore kept pending");
            return self.refresh_resources();
        }
        if waiting {
            if let Some(query) = self.pending_restore.take() {
                self.facet.restore(&query, Some(&tree[..]));
                return self.finish_restore();
            }
        }

        if self.facet.apply_tree(&indexer, &tree) {
            self.reset_level_cursors();
        }
        Vec::new()
    }

    /// Resource fetch finished; stale generations are ignored.
    pub fn resources_loaded(&mut self, generation: u64, page: Option<ResourcesPage>) {
        if self.resources.complete(generation, page) {
            let count = self.resources.page().map_or(0, |p| p.resources.len());
            self.result_cursor = self.result_cursor.min(count.saturating_sub(1));
        }
    }

    // ----- selection -----

    /// Switch to `indexer` (browsing: no history write).
    pub fn choose_indexer(&mut self, indexer: IndexerId) -> Vec<Effect> {
        if self.facet.indexer() == Some(&indexer) {
            return Vec::new();
        }
        self.pending_restore = None;

        let mut effects = Vec::new();
        let tree = match self.trees.get_or_load(&indexer) {
            TreeLookup::Ready(tree) => Some(tree),
            TreeLookup::Pending => None,
            TreeLookup::Load => {
                effects.push(Effect::LoadCategories(indexer.clone()));
                None
            }
        };
        self.facet.set_indexer(indexer, tree.as_deref());
        self.reset_level_cursors();
        effects.extend(self.refresh_resources());
        effects
    }

    /// Select the `index`-th category of displayed level `level` (browsing).
    pub fn select_category(&mut self, level: usize, index: usize) -> Vec<Effect> {
        let Some(category) = self
            .facet
            .levels()
            .get(level)
            .and_then(|entries| entries.get(index))
            .cloned()
        else {
            return Vec::new();
        };
        if !self.facet.select_category_at_level(level, category) {
            return Vec::new();
        }

        self.level_cursors.truncate(level);
        self.level_cursors.push(index);
        self.level_cursors
            .resize(self.facet.levels().len().max(level + 1), 0);
        let last = self.facet.levels().len().saturating_sub(1);
        self.focused_level = (level + 1).min(last);
        self.refresh_resources()
    }

    /// Commit the selection plus the typed keyword as a new search on page 1.
    pub fn submit(&mut self) -> Vec<Effect> {
        self.facet.set_keyword(self.keyword_input.text());
        let query = self.facet.submit();
        self.pending_restore = None;
        self.url.commit(&query);
        self.result_cursor = 0;
        self.refresh_resources()
    }

    /// Jump to `page`; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: u32) -> Vec<Effect> {
        let Some(query) = self.facet.set_page(page, self.resources.total_pages()) else {
            debug!(page, total = self.resources.total_pages(), "page out of range");
            return Vec::new();
        };
        self.pending_restore = None;
        self.url.commit(&query);
        self.result_cursor = 0;
        self.refresh_resources()
    }

    /// Navigate back in the location history.
    pub fn history_back(&mut self) -> Vec<Effect> {
        match self.url.back() {
            Some(query) => self.restore(query),
            None => Vec::new(),
        }
    }

    /// Navigate forward in the location history.
    pub fn history_forward(&mut self) -> Vec<Effect> {
        match self.url.forward() {
            Some(query) => self.restore(query),
            None => Vec::new(),
        }
    }

    /// Re-fetch what the screen is missing: the indexer list, a failed
    /// category tree and the current resource page.
    pub fn reload(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.indexers.is_empty() {
            effects.push(Effect::LoadIndexers);
        }
        if let Some(indexer) = self.facet.indexer().cloned() {
            if self.trees.get(&indexer).is_none() && !self.trees.is_loading(&indexer) {
                self.trees.get_or_load(&indexer);
                effects.push(Effect::LoadCategories(indexer));
            }
        }
        effects.extend(self.resources.reload().map(Effect::FetchResources));
        effects
    }

    /// Request a download of the highlighted resource.
    pub fn download_selected(&mut self) -> Vec<Effect> {
        let Some(indexer) = self.facet.indexer().cloned() else {
            return Vec::new();
        };
        let Some(resource) = self.selected_resource() else {
            return Vec::new();
        };
        let id = resource.id.clone();
        let message = format!("Download requested: {}", resource.title);
        info!(indexer = %indexer, resource = %id, "download requested");
        self.status = Some(message);
        vec![Effect::Download {
            indexer,
            resource: id,
        }]
    }

    // ----- keyword editing -----

    /// Type a character into the keyword box.
    pub fn type_char(&mut self, ch: char) {
        self.keyword_input = keyword_input::handle_char_input(self.take_keyword_input(), ch);
    }

    /// Delete the character before the keyword cursor.
    pub fn keyword_backspace(&mut self) {
        self.keyword_input = keyword_input::handle_backspace(self.take_keyword_input());
    }

    fn take_keyword_input(&mut self) -> KeywordInput {
        std::mem::take(&mut self.keyword_input)
    }

    // ----- key actions -----

    /// Apply a bound key action. `Quit` is handled by the shell.
    pub fn handle_action(&mut self, action: KeyAction) -> Vec<Effect> {
        match action {
            KeyAction::MoveUp => self.move_vertical(false),
            KeyAction::MoveDown => self.move_vertical(true),
            KeyAction::MoveLeft => self.move_horizontal(false),
            KeyAction::MoveRight => self.move_horizontal(true),
            KeyAction::Select => self.activate(),
            KeyAction::FocusIndexers => self.focus_pane(Focus::Indexers),
            KeyAction::FocusCategories => self.focus_pane(Focus::Categories),
            KeyAction::FocusKeyword => self.focus_pane(Focus::Keyword),
            KeyAction::FocusResults => self.focus_pane(Focus::Results),
            KeyAction::CycleFocus => self.focus_pane(self.focus.next()),
            KeyAction::Submit => self.submit(),
            KeyAction::NextPage => self.go_to_page(self.facet.page().saturating_add(1)),
            KeyAction::PrevPage => self.go_to_page(self.facet.page().saturating_sub(1)),
            KeyAction::FirstPage => self.go_to_page(1),
            KeyAction::LastPage => self.go_to_page(self.resources.total_pages()),
            KeyAction::HistoryBack => self.history_back(),
            KeyAction::HistoryForward => self.history_forward(),
            KeyAction::Download => self.download_selected(),
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                Vec::new()
            }
            KeyAction::Refresh => self.reload(),
            KeyAction::Quit => Vec::new(),
        }
    }

    fn focus_pane(&mut self, focus: Focus) -> Vec<Effect> {
        self.focus = focus;
        Vec::new()
    }

    fn move_vertical(&mut self, down: bool) -> Vec<Effect> {
        match self.focus {
            Focus::Categories => {
                let len = self
                    .facet
                    .levels()
                    .get(self.focused_level)
                    .map_or(0, Vec::len);
                if len == 0 {
                    return Vec::new();
                }
                let level = self.focused_level;
                if self.level_cursors.len() <= level {
                    self.level_cursors.resize(level + 1, 0);
                }
                let cursor = &mut self.level_cursors[level];
                *cursor = step(*cursor, down, 1, len);
            }
            Focus::Results => {
                let len = self.result_count();
                if len > 0 {
                    self.result_cursor = step(self.result_cursor, down, self.result_columns, len);
                }
            }
            Focus::Indexers | Focus::Keyword => {}
        }
        Vec::new()
    }

    fn move_horizontal(&mut self, right: bool) -> Vec<Effect> {
        match self.focus {
            Focus::Indexers => {
                if self.indexers.is_empty() {
                    return Vec::new();
                }
                let current = self.selected_indexer_index().unwrap_or(0);
                let next = step(current, right, 1, self.indexers.len());
                let indexer = self.indexers[next].clone();
                self.choose_indexer(indexer)
            }
            Focus::Categories => {
                let last = self.facet.levels().len().saturating_sub(1);
                self.focused_level = step(self.focused_level, right, 1, last + 1);
                Vec::new()
            }
            Focus::Keyword => {
                let input = self.take_keyword_input();
                self.keyword_input = if right {
                    keyword_input::handle_cursor_right(input)
                } else {
                    keyword_input::handle_cursor_left(input)
                };
                Vec::new()
            }
            Focus::Results => {
                let len = self.result_count();
                if len > 0 {
                    self.result_cursor = step(self.result_cursor, right, 1, len);
                }
                Vec::new()
            }
        }
    }

    fn activate(&mut self) -> Vec<Effect> {
        match self.focus {
            Focus::Indexers => Vec::new(),
            Focus::Categories => {
                let level = self.focused_level;
                self.select_category(level, self.level_cursor(level))
            }
            Focus::Keyword => self.submit(),
            Focus::Results => self.download_selected(),
        }
    }

    // ----- internals -----

    fn result_count(&self) -> usize {
        self.resources.page().map_or(0, |page| page.resources.len())
    }

    fn refresh_resources(&mut self) -> Vec<Effect> {
        self.resources
            .refresh(&self.facet.query())
            .map(Effect::FetchResources)
            .into_iter()
            .collect()
    }

    /// Deserialize `query` into the selection. Held pending while the
    /// indexer's tree is not loaded.
    fn restore(&mut self, query: SearchQuery) -> Vec<Effect> {
        debug!(location = %query.to_query_string(), "restoring location");
        self.pending_restore = None;
        self.keyword_input = KeywordInput::new(query.keyword.clone());

        let Some(indexer) = query.indexer.clone() else {
            self.facet.restore(&query, None);
            return self.finish_restore();
        };
        match self.trees.get_or_load(&indexer) {
            TreeLookup::Ready(tree) => {
                self.facet.restore(&query, Some(&tree[..]));
                self.finish_restore()
            }
            TreeLookup::Pending => {
                self.facet.restore(&query, None);
                self.pending_restore = Some(query);
                Vec::new()
            }
            TreeLookup::Load => {
                self.facet.restore(&query, None);
                self.pending_restore = Some(query);
                vec![Effect::LoadCategories(indexer)]
            }
        }
    }

    fn finish_restore(&mut self) -> Vec<Effect> {
        self.url.canonicalize(&self.facet.query());
        self.sync_level_cursors();
        self.result_cursor = 0;
        self.refresh_resources()
    }

    fn reset_level_cursors(&mut self) {
        self.level_cursors = vec![0; self.facet.levels().len()];
        self.focused_level = 0;
    }

    /// Point every level cursor at the selected category of that level.
    fn sync_level_cursors(&mut self) {
        let levels = self.facet.levels();
        self.level_cursors = levels
            .iter()
            .enumerate()
            .map(|(level, entries)| {
                self.facet
                    .path()
                    .get(level)
                    .and_then(|selected| entries.iter().position(|c| c.id == selected.id))
                    .unwrap_or(0)
            })
            .collect();
        self.focused_level = self.facet.path().len().min(levels.len().saturating_sub(1));
    }
}

/// Move `cursor` by `by` within `[0, len)`, saturating at both ends.
fn step(cursor: usize, forward: bool, by: usize, len: usize) -> usize {
    if forward {
        (cursor + by).min(len.saturating_sub(1))
    } else {
        cursor.saturating_sub(by)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
