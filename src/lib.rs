//! Indexer browser (idxview)
//!
//! TUI client for an indexer's `/api/v1` HTTP API: pick an indexer, drill
//! through its category tree, search by keyword and page through resource
//! cards. The current search is mirrored into a query-string location with
//! back/forward history.
//!
//! Pure core (`model`, `state`) with an impure shell (`api`, `fetch`, `view`).

pub mod api;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

// Re-export main loop integration
pub mod integration;
