//! Category navigation resolution.
//!
//! Turns the category tree and the current route into the two lists the
//! sidebar shows:
//!
//! - every top-level category, flagged `active` when the current path
//!   *contains* the category path (so descendant pages keep their section
//!   highlighted)
//! - the children of the top-level category whose path *exactly* equals the
//!   current path (empty when nothing matches)
//!
//! The two rules use different matching on purpose and must stay that way.

use serde::Serialize;

use crate::category::{CategoryNode, CategoryTree};

/// Link rendered in the sidebar or the children list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link target path.
    pub path: String,
    /// Display title.
    pub title: String,
    /// Glyph reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the link is highlighted.
    pub active: bool,
}

impl NavLink {
    fn from_node(node: &CategoryNode, active: bool) -> Self {
        Self {
            path: node.path.clone(),
            title: node.title.clone(),
            icon: node.icon.clone(),
            active,
        }
    }
}

/// Resolved navigation for one render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Top-level categories in tree order.
    pub categories: Vec<NavLink>,
    /// Children of the active category in tree order.
    pub children: Vec<NavLink>,
}

impl Navigation {
    /// Resolve navigation for `current_path`.
    ///
    /// Never fails: an unknown path simply yields no active categories and
    /// no children.
    #[must_use]
    pub fn resolve(tree: &CategoryTree, current_path: &str) -> Self {
        let top_level = tree.list_top_level();

        let categories = top_level
            .iter()
            .map(|node| NavLink::from_node(node, is_highlighted(node, current_path)))
            .collect();

        let children = active_node(top_level, current_path)
            .map(|node| {
                node.children
                    .iter()
                    .map(|child| NavLink::from_node(child, false))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            categories,
            children,
        }
    }
}

/// First top-level node whose path exactly equals `current_path`.
fn active_node<'a>(nodes: &'a [CategoryNode], current_path: &str) -> Option<&'a CategoryNode> {
    nodes.iter().find(|node| node.path == current_path)
}

/// Sidebar highlight: substring match on the node path.
fn is_highlighted(node: &CategoryNode, current_path: &str) -> bool {
    current_path.contains(node.path.as_str())
}
