//! Indexer backend interface.
//!
//! [`IndexerApi`] is the collaborator the state machine depends on. Trait
//! methods report failures as [`ApiError`]; the `*_or_*` helpers below turn
//! them into the degraded values the UI renders (empty list, absent page) and
//! log them, so no request failure ever reaches the rendering layer.

pub mod http;

pub use http::HttpIndexerApi;

use crate::model::{ApiError, Category, CategoryId, IndexerId, ResourceId, ResourcesPage};
use tracing::{info, warn};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Parameters of one resource listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    /// Indexer to query.
    pub indexer: IndexerId,
    /// Category to list.
    pub category: CategoryId,
    /// Keyword filter, empty for none.
    pub keyword: String,
    /// 1-based page.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

/// Operations offered by the indexer backend.
pub trait IndexerApi: Send + Sync {
    /// Ids of all indexers.
    fn list_indexers(&self) -> Result<Vec<IndexerId>, ApiError>;

    /// Full category tree of `indexer`.
    fn list_categories(&self, indexer: &IndexerId) -> Result<Vec<Category>, ApiError>;

    /// One page of resources.
    fn list_resources(&self, request: &ResourceRequest) -> Result<ResourcesPage, ApiError>;

    /// Ask the backend to start downloading a resource.
    fn download(&self, indexer: &IndexerId, resource: &ResourceId) -> Result<(), ApiError>;
}

/// Indexer ids, empty on failure.
pub fn indexers_or_empty(api: &dyn IndexerApi) -> Vec<IndexerId> {
    api.list_indexers().unwrap_or_else(|err| {
        warn!(error = %err, "failed to fetch indexers");
        Vec::new()
    })
}

/// Category tree, `None` on failure (rendered as an empty tree).
pub fn categories_or_empty(api: &dyn IndexerApi, indexer: &IndexerId) -> Option<Vec<Category>> {
    match api.list_categories(indexer) {
        Ok(categories) => Some(categories),
        Err(err) => {
            warn!(indexer = %indexer, error = %err, "failed to fetch categories");
            None
        }
    }
}

/// Resource page, `None` on failure.
pub fn resources_or_absent(api: &dyn IndexerApi, request: &ResourceRequest) -> Option<ResourcesPage> {
    match api.list_resources(request) {
        Ok(page) => Some(page),
        Err(err) => {
            warn!(
                indexer = %request.indexer,
                category = %request.category,
                page = request.page,
                error = %err,
                "failed to fetch resources"
            );
            None
        }
    }
}

/// Fire a download, logging the outcome.
pub fn download_and_log(api: &dyn IndexerApi, indexer: &IndexerId, resource: &ResourceId) {
    match api.download(indexer, resource) {
        Ok(()) => info!(indexer = %indexer, resource = %resource, "download initiated"),
        Err(err) => warn!(indexer = %indexer, resource = %resource, error = %err, "error initiating download"),
    }
}
