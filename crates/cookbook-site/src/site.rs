//! Site handle shared by the server and CLI.
//!
//! [`Site`] owns the immutable category tree for the lifetime of the
//! process. Concurrent reads need no locking because nothing writes to the
//! tree after construction.

use std::sync::Arc;

use serde::Serialize;

use crate::category::{CategoryNode, CategoryTree};
use crate::navigation::Navigation;

/// Page metadata handed to the page head / SEO layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Page path.
    pub path: String,
    /// Page title, unmodified.
    pub title: String,
}

/// Documentation site.
pub struct Site {
    tree: Arc<CategoryTree>,
    title: String,
}

impl Site {
    /// Create a site over a constructed category tree.
    #[must_use]
    pub fn new(tree: Arc<CategoryTree>, title: impl Into<String>) -> Self {
        Self {
            tree,
            title: title.into(),
        }
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category tree backing this site.
    #[must_use]
    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// Top-level categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryNode] {
        self.tree.list_top_level()
    }

    /// Resolve sidebar navigation for the current path.
    #[must_use]
    pub fn navigation(&self, current_path: &str) -> Navigation {
        Navigation::resolve(&self.tree, current_path)
    }

    /// Metadata for the page at `path`, if a category node has that path.
    #[must_use]
    pub fn page_meta(&self, path: &str) -> Option<PageMeta> {
        self.tree.find(path).map(|node| PageMeta {
            path: node.path.clone(),
            title: node.title.clone(),
        })
    }
}
