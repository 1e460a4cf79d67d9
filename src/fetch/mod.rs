//! Fetch worker (impure shell).
//!
//! Executes [`Effect`]s on short-lived background threads and hands the
//! results back to the UI thread as [`FetchEvent`]s over an mpsc channel. The
//! event loop drains the channel with [`FetchWorker::poll`] between key events.
//! Requests are never cancelled; stale resource pages are discarded by the
//! state machine using their generation.

use crate::api::{self, IndexerApi, ResourceRequest};
use crate::model::{Category, IndexerId, ResourcesPage};
use crate::state::{Effect, FetchTicket};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Completion of a fetch effect. Failures are already degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// Indexer list, empty on failure.
    IndexersLoaded(Vec<IndexerId>),
    /// Category tree of `indexer`, `None` on failure.
    CategoriesLoaded {
        /// Indexer the tree belongs to.
        indexer: IndexerId,
        /// Top-level categories.
        tree: Option<Vec<Category>>,
    },
    /// Resource page for a fetch ticket, `None` on failure.
    ResourcesLoaded {
        /// Generation of the ticket.
        generation: u64,
        /// Fetched page.
        page: Option<ResourcesPage>,
    },
}

/// Runs effects against an [`IndexerApi`].
pub struct FetchWorker {
    api: Arc<dyn IndexerApi>,
    page_size: u32,
    tx: Sender<FetchEvent>,
    rx: Receiver<FetchEvent>,
}

impl FetchWorker {
    /// Worker requesting `page_size` resources per page.
    pub fn new(api: Arc<dyn IndexerApi>, page_size: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api,
            page_size: page_size.max(1),
            tx,
            rx,
        }
    }

    /// Start every effect in `effects`.
    pub fn dispatch_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }

    /// Start one effect on a background thread.
    pub fn dispatch(&self, effect: Effect) {
        debug!(?effect, "dispatching effect");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let page_size = self.page_size;

        let spawned = thread::Builder::new()
            .name("idxview-fetch".to_string())
            .spawn(move || {
                if let Some(event) = run_effect(api.as_ref(), effect, page_size) {
                    // Receiver gone means the UI is shutting down.
                    let _ = tx.send(event);
                }
            });
        if let Err(err) = spawned {
            warn!(error = %err, "failed to spawn fetch thread");
        }
    }

    /// Drain every completed event without blocking.
    pub fn poll(&self) -> Vec<FetchEvent> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next event.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<FetchEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Execute one effect synchronously. Downloads produce no event.
pub fn run_effect(api: &dyn IndexerApi, effect: Effect, page_size: u32) -> Option<FetchEvent> {
    match effect {
        Effect::LoadIndexers => Some(FetchEvent::IndexersLoaded(api::indexers_or_empty(api))),
        Effect::LoadCategories(indexer) => {
            let tree = api::categories_or_empty(api, &indexer);
            Some(FetchEvent::CategoriesLoaded { indexer, tree })
        }
        Effect::FetchResources(ticket) => {
            let generation = ticket.generation;
            let page = resource_request(&ticket, page_size)
                .and_then(|request| api::resources_or_absent(api, &request));
            Some(FetchEvent::ResourcesLoaded { generation, page })
        }
        Effect::Download { indexer, resource } => {
            api::download_and_log(api, &indexer, &resource);
            None
        }
    }
}

fn resource_request(ticket: &FetchTicket, page_size: u32) -> Option<ResourceRequest> {
    let query = &ticket.query;
    Some(ResourceRequest {
        indexer: query.indexer.clone()?,
        category: query.category.clone()?,
        keyword: query.keyword.clone(),
        page: query.page,
        page_size,
    })
}
