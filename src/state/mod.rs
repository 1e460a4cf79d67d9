//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI or network.

pub mod app_state;
pub mod category_tree;
pub mod facet;
pub mod keyword_input;
pub mod pagination;
pub mod resource_list;
pub mod url_sync;

// Re-export for convenience
pub use app_state::{AppState, Effect, Focus};
pub use category_tree::{CategoryTree, CategoryTreeIndex, TreeLookup};
pub use facet::FacetSelectionState;
pub use keyword_input::KeywordInput;
pub use pagination::{window, PageMarker};
pub use resource_list::{FetchTicket, ResourceListController};
pub use url_sync::{HistoryWrite, Navigator, SessionHistory, UrlSync};
