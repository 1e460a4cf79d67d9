//! Resource listings as returned by an indexer.

use crate::model::ResourceId;
use serde::{Deserialize, Serialize};

/// External database reference attached to a resource (e.g., IMDb, Douban).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDb {
    /// Database name.
    pub db: String,
    /// Link to the entry.
    pub link: String,
    /// Rating as reported by the indexer.
    #[serde(default)]
    pub rating: String,
}

/// One listed resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Indexer-specific id, used for downloads.
    pub id: ResourceId,
    /// Primary title.
    pub title: String,
    /// Secondary title (translated name, subtitle).
    #[serde(default)]
    pub title2: String,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub created_date: i64,
    /// Category display name.
    #[serde(default)]
    pub category: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Resolution label ("1080p", "4K", ...).
    #[serde(default)]
    pub resolution: String,
    /// Seeder count.
    #[serde(default)]
    pub seeders: u32,
    /// Leecher count.
    #[serde(default)]
    pub leechers: u32,
    /// External database references.
    #[serde(default)]
    pub dbs: Vec<VideoDb>,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-download flag.
    #[serde(default)]
    pub free: bool,
    /// Free-form labels.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Pagination block of a listing response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Total number of resources.
    pub total: u32,
}

/// One page of resources. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Resources in display order.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl ResourcesPage {
    /// Total pages, never below 1.
    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages.max(1)
    }

    /// True if the page holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
