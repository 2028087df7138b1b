//! Category tree for site navigation.
//!
//! The tree is a rooted forest: an ordered sequence of top-level
//! [`CategoryNode`]s, each owning an ordered list of child nodes. Order is
//! display order and is never changed after construction.
//!
//! Nodes are validated once in [`CategoryTree::new`]; afterwards the tree is
//! read-only and can be shared freely between threads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One entry in the navigation hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryNode {
    /// Route key (e.g., "/forwarding/props"), unique across the tree.
    pub path: String,
    /// Display label.
    pub title: String,
    /// Symbolic glyph reference, passed through to the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a node without icon or children.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Set the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<CategoryNode>) -> Self {
        self.children = children;
        self
    }
}

/// Error returned when category nodes fail validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Node path is empty.
    #[error("Category path cannot be empty (title: {title:?})")]
    EmptyPath {
        /// Title of the offending node.
        title: String,
    },
    /// Node path does not start with a slash.
    #[error("Category path must start with '/': {0}")]
    InvalidPath(String),
    /// Node title is empty or whitespace.
    #[error("Category title cannot be empty: {0}")]
    EmptyTitle(String),
    /// Same path used by more than one node.
    #[error("Duplicate category path: {0}")]
    DuplicatePath(String),
    /// Child node has children of its own.
    #[error("Category {0} is nested too deeply (only one level of children is supported)")]
    TooDeep(String),
}

/// Immutable category tree.
///
/// Constructed once at startup and passed explicitly to whatever needs to
/// read it (usually wrapped in an `Arc`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
}

impl CategoryTree {
    /// Create a tree from top-level nodes.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if any node has an empty or malformed path, an
    /// empty title, a path already used elsewhere in the tree, or children
    /// nested below the first level.
    pub fn new(nodes: Vec<CategoryNode>) -> Result<Self, TreeError> {
        validate_tree(&nodes)?;
        Ok(Self { nodes })
    }

    /// Top-level nodes in display order.
    ///
    /// An empty tree yields an empty slice.
    #[must_use]
    pub fn list_top_level(&self) -> &[CategoryNode] {
        &self.nodes
    }

    /// Find a node at any level whose path exactly equals `path`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&CategoryNode> {
        self.nodes
            .iter()
            .flat_map(|node| std::iter::once(node).chain(&node.children))
            .find(|node| node.path == path)
    }

    /// Total number of nodes, top-level and children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|node| 1 + node.children.len()).sum()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Validate every node and the one-level nesting rule.
fn validate_tree(nodes: &[CategoryNode]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for node in nodes {
        validate_node(node, &mut seen)?;
        for child in &node.children {
            validate_node(child, &mut seen)?;
            if !child.children.is_empty() {
                return Err(TreeError::TooDeep(child.path.clone()));
            }
        }
    }
    Ok(())
}

/// Validate a single node's own fields and record its path.
fn validate_node<'a>(node: &'a CategoryNode, seen: &mut HashSet<&'a str>) -> Result<(), TreeError> {
    if node.path.is_empty() {
        return Err(TreeError::EmptyPath {
            title: node.title.clone(),
        });
    }
    if !node.path.starts_with('/') {
        return Err(TreeError::InvalidPath(node.path.clone()));
    }
    if node.title.trim().is_empty() {
        return Err(TreeError::EmptyTitle(node.path.clone()));
    }
    if !seen.insert(node.path.as_str()) {
        return Err(TreeError::DuplicatePath(node.path.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_tree() -> CategoryTree {
        CategoryTree::new(vec![
            CategoryNode::new("/a", "A")
                .with_icon("book")
                .with_children(vec![
                    CategoryNode::new("/a/x", "X"),
                    CategoryNode::new("/a/y", "Y"),
                ]),
            CategoryNode::new("/b", "B"),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_top_level_preserves_order() {
        let tree = sample_tree();

        let paths: Vec<&str> = tree
            .list_top_level()
            .iter()
            .map(|n| n.path.as_str())
            .collect();

        assert_eq!(paths, vec!["/a", "/b"]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = CategoryTree::new(Vec::new()).unwrap();

        assert!(tree.list_top_level().is_empty());
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_len_counts_children() {
        assert_eq!(sample_tree().len(), 4);
    }

    #[test]
    fn test_find_top_level() {
        let tree = sample_tree();

        let node = tree.find("/a").unwrap();

        assert_eq!(node.title, "A");
        assert_eq!(node.icon.as_deref(), Some("book"));
    }

    #[test]
    fn test_find_child() {
        let tree = sample_tree();

        assert_eq!(tree.find("/a/y").unwrap().title, "Y");
    }

    #[test]
    fn test_find_unknown() {
        let tree = sample_tree();

        assert!(tree.find("/c").is_none());
        assert!(tree.find("/a/").is_none());
        assert!(tree.find("").is_none());
    }

    #[test]
    fn test_rejects_empty_path() {
        let err = CategoryTree::new(vec![CategoryNode::new("", "Home")]).unwrap_err();

        assert_eq!(
            err,
            TreeError::EmptyPath {
                title: "Home".to_owned()
            }
        );
    }

    #[test]
    fn test_rejects_path_without_slash() {
        let err = CategoryTree::new(vec![CategoryNode::new("guide", "Guide")]).unwrap_err();

        assert_eq!(err, TreeError::InvalidPath("guide".to_owned()));
    }

    #[test]
    fn test_rejects_blank_title() {
        let err = CategoryTree::new(vec![CategoryNode::new("/a", "  ")]).unwrap_err();

        assert_eq!(err, TreeError::EmptyTitle("/a".to_owned()));
    }

    #[test]
    fn test_rejects_duplicate_top_level_path() {
        let err = CategoryTree::new(vec![
            CategoryNode::new("/a", "A"),
            CategoryNode::new("/a", "Again"),
        ])
        .unwrap_err();

        assert_eq!(err, TreeError::DuplicatePath("/a".to_owned()));
    }

    #[test]
    fn test_rejects_duplicate_path_across_levels() {
        let err = CategoryTree::new(vec![
            CategoryNode::new("/a", "A").with_children(vec![CategoryNode::new("/b", "Nested B")]),
            CategoryNode::new("/b", "B"),
        ])
        .unwrap_err();

        assert_eq!(err, TreeError::DuplicatePath("/b".to_owned()));
    }

    #[test]
    fn test_rejects_grandchildren() {
        let err = CategoryTree::new(vec![CategoryNode::new("/a", "A").with_children(vec![
            CategoryNode::new("/a/x", "X")
                .with_children(vec![CategoryNode::new("/a/x/deep", "Deep")]),
        ])])
        .unwrap_err();

        assert_eq!(err, TreeError::TooDeep("/a/x".to_owned()));
    }

    #[test]
    fn test_node_serialization_skips_empty_fields() {
        let node = CategoryNode::new("/b", "B");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["path"], "/b");
        assert_eq!(json["title"], "B");
        assert!(json.get("icon").is_none());
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_node_serialization_with_children() {
        let tree = sample_tree();

        let json = serde_json::to_value(&tree.list_top_level()[0]).unwrap();

        assert_eq!(json["icon"], "book");
        assert_eq!(json["children"][0]["path"], "/a/x");
        assert_eq!(json["children"][1]["title"], "Y");
    }
}
