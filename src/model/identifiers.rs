//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time, so
//! "nothing selected" is always `Option::None` and never an empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an indexer backend (e.g., "nyaa", "mteam").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IndexerId(String);

impl IndexerId {
    /// Smart constructor: validates non-empty indexer id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIndexerId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidIndexerId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for IndexerId {
    type Error = InvalidIndexerId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IndexerId> for String {
    fn from(id: IndexerId) -> Self {
        id.0
    }
}

/// Identifier of a category inside one indexer's tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Smart constructor: validates non-empty category id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidCategoryId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidCategoryId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = InvalidCategoryId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

/// Identifier of a resource listed by an indexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Smart constructor: validates non-empty resource id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidResourceId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidResourceId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = InvalidResourceId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejected indexer id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIndexerId {
    /// The id was the empty string.
    #[error("Indexer ID cannot be empty")]
    Empty,
}

/// Rejected category id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCategoryId {
    /// The id was the empty string.
    #[error("Category ID cannot be empty")]
    Empty,
}

/// Rejected resource id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidResourceId {
    /// The id was the empty string.
    #[error("Resource ID cannot be empty")]
    Empty,
}

// ===== Tests =====
