//! Category trees and root-to-leaf category paths.

use crate::model::CategoryId;
use serde::{Deserialize, Serialize};

/// One node of an indexer's category tree.
///
/// Trees are owned and replaced wholesale per indexer, never mutated in place.
/// A category with no sub-categories is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Indexer-specific category id.
    pub id: CategoryId,
    /// Human-readable name.
    pub name: String,
    /// Ordered children; omitted on the wire for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<Category>,
}

impl Category {
    /// Create a category with the given children.
    pub fn new(id: CategoryId, name: impl Into<String>, sub_categories: Vec<Category>) -> Self {
        Self {
            id,
            name: name.into(),
            sub_categories,
        }
    }

    /// True if this category has no children.
    pub fn is_leaf(&self) -> bool {
        self.sub_categories.is_empty()
    }
}

/// Root-first chain of categories from a top-level entry to the selection.
///
/// Invariant (upheld by the code that builds paths): `path[i]` is an element of
/// `path[i-1].sub_categories`, and `path[0]` is a top-level category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPath(Vec<Category>);

impl CategoryPath {
    /// Empty path (no category selected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected levels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no category is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deepest selected category.
    pub fn leaf(&self) -> Option<&Category> {
        self.0.last()
    }

    /// Selected category at `level`.
    pub fn get(&self, level: usize) -> Option<&Category> {
        self.0.get(level)
    }

    /// Iterate root-first.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    /// View as a slice.
    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    /// Drop every selection at depth `len` and below.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Append a selection one level deeper.
    pub fn push(&mut self, category: Category) {
        self.0.push(category);
    }

    /// Ids root-first.
    pub fn ids(&self) -> Vec<&CategoryId> {
        self.0.iter().map(|c| &c.id).collect()
    }

    /// Names joined with " / " (e.g., "Anime / Anime - Raw").
    pub fn breadcrumb(&self) -> String {
        self.0
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl From<Vec<Category>> for CategoryPath {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

/// Find the chain of ancestors leading to `target` (inclusive), depth-first.
///
/// Returns `None` if the id is not in `tree`; callers treat that as
/// "no category selected", not as an error.
pub fn find_path(tree: &[Category], target: &CategoryId) -> Option<CategoryPath> {
    let mut chain = Vec::new();
    if search(tree, target, &mut chain) {
        Some(CategoryPath(chain))
    } else {
        None
    }
}

fn search(nodes: &[Category], target: &CategoryId, chain: &mut Vec<Category>) -> bool {
    for node in nodes {
        chain.push(node.clone());
        if &node.id == target || search(&node.sub_categories, target, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str, name: &str, subs: Vec<Category>) -> Category {
        Category::new(CategoryId::new(id).unwrap(), name, subs)
    }

    fn sample_tree() -> Vec<Category> {
        vec![
            cat("a", "A", vec![cat("a1", "A1", vec![])]),
            cat(
                "b",
                "B",
                vec![
                    cat("b1", "B1", vec![]),
                    cat("b2", "B2", vec![cat("b2x", "B2X", vec![])]),
                ],
            ),
        ]
    }

    #[test]
    fn find_path_returns_root_to_target_chain() {
        let tree = vec![cat("a", "A", vec![cat("a1", "A1", vec![])])];

        let path = find_path(&tree, &CategoryId::new("a1").unwrap()).expect("found");

        let names: Vec<_> = path.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "A1"]);
    }

    #[test]
    fn find_path_finds_top_level_category() {
        let path = find_path(&sample_tree(), &CategoryId::new("b").unwrap()).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.leaf().unwrap().name, "B");
    }

    #[test]
    fn find_path_walks_past_earlier_siblings() {
        let path = find_path(&sample_tree(), &CategoryId::new("b2x").unwrap()).unwrap();
        let ids: Vec<_> = path.ids().into_iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["b", "b2", "b2x"]);
    }

    #[test]
    fn find_path_returns_none_for_missing_id() {
        assert!(find_path(&sample_tree(), &CategoryId::new("missing").unwrap()).is_none());
    }

    #[test]
    fn find_path_on_empty_tree_is_none() {
        assert!(find_path(&[], &CategoryId::new("a").unwrap()).is_none());
    }

    #[test]
    fn breadcrumb_joins_names() {
        let path = find_path(&sample_tree(), &CategoryId::new("b2x").unwrap()).unwrap();
        assert_eq!(path.breadcrumb(), "B / B2 / B2X");
        assert_eq!(CategoryPath::new().breadcrumb(), "");
    }

    #[test]
    fn category_deserializes_with_missing_sub_categories() {
        let json = r#"[{"id":"1_0","name":"Anime","subCategories":[{"id":"1_1","name":"Anime - AMV"}]}]"#;
        let tree: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(tree[0].sub_categories.len(), 1);
        assert!(tree[0].sub_categories[0].is_leaf());
        assert!(!tree[0].is_leaf());
    }
}
