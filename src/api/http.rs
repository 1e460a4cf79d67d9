//! HTTP implementation of [`IndexerApi`] over the `/api/v1` endpoints.

use super::{IndexerApi, ResourceRequest};
use crate::model::{ApiError, Category, IndexerId, ResourceId, ResourcesPage};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP client rooted at the server URL.
#[derive(Debug, Clone)]
pub struct HttpIndexerApi {
    base: Url,
    client: Client,
}

impl HttpIndexerApi {
    /// Client for `base_url` (e.g. `http://127.0.0.1:8080`), every request
    /// bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { base, client })
    }

    /// Server URL requests are rooted at.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `<base>/api/v1/<segments...>`, each segment percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn resources_url(&self, request: &ResourceRequest) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["indexers", request.indexer.as_str(), "resources"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("category", request.category.as_str());
            if !request.keyword.is_empty() {
                pairs.append_pair("keyword", &request.keyword);
            }
            pairs.append_pair("page", &request.page.to_string());
            pairs.append_pair("pageSize", &request.page_size.to_string());
        }
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<reqwest::blocking::Response, ApiError> {
        let url_str = url.to_string();
        debug!(url = %url_str, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Transport {
                url: url_str.clone(),
                reason: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url_str,
            });
        }
        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let url_str = url.to_string();
        self.get(url)?.json::<T>().map_err(|e| ApiError::Decode {
            url: url_str,
            reason: e.to_string(),
        })
    }
}

impl IndexerApi for HttpIndexerApi {
    fn list_indexers(&self) -> Result<Vec<IndexerId>, ApiError> {
        self.get_json(self.endpoint(&["indexers"])?)
    }

    fn list_categories(&self, indexer: &IndexerId) -> Result<Vec<Category>, ApiError> {
        self.get_json(self.endpoint(&["indexers", indexer.as_str(), "categories"])?)
    }

    fn list_resources(&self, request: &ResourceRequest) -> Result<ResourcesPage, ApiError> {
        self.get_json(self.resources_url(request)?)
    }

    fn download(&self, indexer: &IndexerId, resource: &ResourceId) -> Result<(), ApiError> {
        let url = self.endpoint(&[
            "indexers",
            indexer.as_str(),
            "resources",
            resource.as_str(),
            "download",
        ])?;
        self.get(url).map(drop)
    }
}
