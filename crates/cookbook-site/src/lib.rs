//! Category tree and navigation resolution for Cookbook.
//!
//! This crate provides:
//! - [`CategoryTree`]: the static, validated category hierarchy
//! - [`Navigation`]: sidebar resolution for a current path
//! - [`Site`]: the shared handle bundling both with page metadata lookup
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use cookbook_site::{CategoryTree, Site};
//!
//! let tree = CategoryTree::from_yaml_str(
//!     "- path: /auth\n  title: Authentication\n  children:\n    - path: /auth/login\n      title: Login\n",
//! )?;
//! let site = Site::new(Arc::new(tree), "Cookbook");
//!
//! let nav = site.navigation("/auth");
//! assert!(nav.categories[0].active);
//! assert_eq!(nav.children[0].title, "Login");
//! # Ok(())
//! # }
//! ```

mod category;
mod loader;
mod navigation;
mod site;

pub use category::{CategoryNode, CategoryTree, TreeError};
pub use loader::LoadError;
pub use navigation::{NavLink, Navigation};
pub use site::{PageMeta, Site};
