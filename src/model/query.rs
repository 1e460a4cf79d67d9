//! The location-serializable search query.
//!
//! Location layout (`indexer`, `category`, `keyword`, `page`):
//! - `indexer`, `category` and `keyword` are omitted when nothing is set
//! - `page` is omitted when it is 1
//! - values are percent-encoded; `+` decodes to a space

use crate::model::{CategoryId, IndexerId};
use std::borrow::Cow;

const KEY_INDEXER: &str = "indexer";
const KEY_CATEGORY: &str = "category";
const KEY_KEYWORD: &str = "keyword";
const KEY_PAGE: &str = "page";

/// Canonical projection of the selection state used to fetch resources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    /// Selected indexer.
    pub indexer: Option<IndexerId>,
    /// Deepest selected category.
    pub category: Option<CategoryId>,
    /// Free-text search term, empty when none.
    pub keyword: String,
    /// 1-based page number.
    pub page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            indexer: None,
            category: None,
            keyword: String::new(),
            page: 1,
        }
    }
}

impl SearchQuery {
    /// Build a query, clamping `page` to at least 1.
    pub fn new(
        indexer: Option<IndexerId>,
        category: Option<CategoryId>,
        keyword: impl Into<String>,
        page: u32,
    ) -> Self {
        Self {
            indexer,
            category,
            keyword: keyword.into(),
            page: page.max(1),
        }
    }

    /// Same query on another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// True when both indexer and category are set, i.e. resources can be listed.
    pub fn is_fetchable(&self) -> bool {
        self.indexer.is_some() && self.category.is_some()
    }

    /// Serialize to a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, Cow<'_, str>)> = Vec::with_capacity(4);
        if let Some(indexer) = &self.indexer {
            pairs.push((KEY_INDEXER, urlencoding::encode(indexer.as_str())));
        }
        if let Some(category) = &self.category {
            pairs.push((KEY_CATEGORY, urlencoding::encode(category.as_str())));
        }
        if !self.keyword.is_empty() {
            pairs.push((KEY_KEYWORD, urlencoding::encode(&self.keyword)));
        }
        if self.page > 1 {
            pairs.push((KEY_PAGE, Cow::Owned(self.page.to_string())));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a location. Never fails.
    ///
    /// Accepts a bare query string, one with a leading `?`, or a full URL
    /// (everything up to the first `?` is ignored). Unknown keys are ignored
    /// and the first occurrence of a repeated key wins. A missing, non-numeric,
    /// zero or negative `page` becomes 1.
    pub fn parse(location: &str) -> Self {
        let query = match location.split_once('?') {
            Some((_, query)) => query,
            None if location.contains('=') => location,
            None => "",
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut indexer = None;
        let mut category = None;
        let mut keyword = None;
        let mut page = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);
            match key.as_str() {
                KEY_INDEXER if indexer.is_none() => indexer = Some(value),
                KEY_CATEGORY if category.is_none() => category = Some(value),
                KEY_KEYWORD if keyword.is_none() => keyword = Some(value),
                KEY_PAGE if page.is_none() => page = Some(value),
                _ => {}
            }
        }

        Self {
            indexer: indexer.and_then(|v| IndexerId::new(v).ok()),
            category: category.and_then(|v| CategoryId::new(v).ok()),
            keyword: keyword.unwrap_or_default(),
            page: page.as_deref().map(parse_page).unwrap_or(1),
        }
    }
}

/// Parse a page value, clamping anything unusable to 1.
pub fn parse_page(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
