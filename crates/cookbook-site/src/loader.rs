//! YAML loading for category trees.
//!
//! Categories are static configuration: a YAML sequence of nodes with
//! `path`, `title`, optional `icon` and optional `children`.

use std::path::{Path, PathBuf};

use crate::category::{CategoryNode, CategoryTree, TreeError};

/// Category tree shipped with the site.
const BUILTIN_CATEGORIES: &str = include_str!("../categories.yaml");

/// Error loading a category tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Categories file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the categories file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Content is not a valid YAML node list.
    #[error("Invalid categories YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Nodes parsed but failed validation.
    #[error(transparent)]
    Invalid(#[from] TreeError),
}

impl CategoryTree {
    /// Parse a category tree from YAML content.
    ///
    /// Empty or whitespace-only content yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] for malformed YAML or unknown fields and
    /// [`LoadError::Invalid`] if the nodes fail validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let nodes: Vec<CategoryNode> = serde_yaml::from_str(trimmed)?;
        Ok(Self::new(nodes)?)
    }

    /// Load a category tree from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`CategoryTree::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), nodes = tree.len(), "Loaded categories");
        Ok(tree)
    }

    /// Category tree embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] only if the embedded YAML is broken.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_yaml_str(BUILTIN_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_simple_tree() {
        let yaml = r"
- path: /a
  title: A
  icon: book
  children:
    - path: /a/x
      title: X
- path: /b
  title: B
";
        let tree = CategoryTree::from_yaml_str(yaml).unwrap();

        let expected = CategoryTree::new(vec![
            CategoryNode::new("/a", "A")
                .with_icon("book")
                .with_children(vec![CategoryNode::new("/a/x", "X")]),
            CategoryNode::new("/b", "B"),
        ])
        .unwrap();
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_parse_quoted_values() {
        let yaml = "- path: \"/a\"\n  title: 'Attribute: forwarding'";
        let tree = CategoryTree::from_yaml_str(yaml).unwrap();

        assert_eq!(tree.list_top_level()[0].title, "Attribute: forwarding");
    }

    #[test]
    fn test_empty_content_is_empty_tree() {
        assert!(CategoryTree::from_yaml_str("").unwrap().is_empty());
        assert!(CategoryTree::from_yaml_str("   \n\t  ").unwrap().is_empty());
    }

    #[test]
    fn test_empty_sequence_is_empty_tree() {
        assert!(CategoryTree::from_yaml_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = CategoryTree::from_yaml_str("- path: [invalid yaml");

        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_title_is_parse_error() {
        let result = CategoryTree::from_yaml_str("- path: /a");

        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let result = CategoryTree::from_yaml_str("- path: /a\n  title: A\n  colour: red");

        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "got {err:?}");
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_validation_error_is_surfaced() {
        let yaml = "- path: /a\n  title: A\n- path: /a\n  title: B";
        let result = CategoryTree::from_yaml_str(yaml);

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(TreeError::DuplicatePath(ref p)) if p == "/a"
        ));
        assert_eq!(err.to_string(), "Duplicate category path: /a");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("categories.yaml");
        std::fs::write(&path, "- path: /guide\n  title: Guide\n").unwrap();

        let tree = CategoryTree::load(&path).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.find("/guide").unwrap().title, "Guide");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = CategoryTree::load(&path).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_builtin_tree_is_valid() {
        let tree = CategoryTree::builtin().unwrap();

        assert!(!tree.is_empty());
        assert!(tree.find("/forwarding").is_some());
        assert!(tree.find("/auth").is_some());
    }
}
