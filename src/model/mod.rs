//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod category;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod query;
pub mod resource;

// Re-export for convenience
pub use category::{find_path, Category, CategoryPath};
pub use error::{ApiError, AppError};
pub use identifiers::{
    CategoryId, IndexerId, InvalidCategoryId, InvalidIndexerId, InvalidResourceId, ResourceId,
};
pub use key_action::KeyAction;
pub use query::SearchQuery;
pub use resource::{Pagination, Resource, ResourcesPage, VideoDb};
