//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod serve;

use std::path::PathBuf;

use clap::Args;
use cookbook_config::{CliSettings, Config};
use cookbook_site::CategoryTree;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use serve::ServeArgs;

/// Where configuration and categories come from.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover cookbook.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Categories YAML file (overrides config; default: built-in tree).
    #[arg(long, env = "COOKBOOK_CATEGORIES")]
    categories: Option<PathBuf>,
}

impl SourceArgs {
    /// Load configuration, letting `settings` and `--categories` override it.
    pub(crate) fn load_config(&self, mut settings: CliSettings) -> Result<Config, CliError> {
        settings.categories.clone_from(&self.categories);
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Build the category tree the configuration points at.
pub(crate) fn load_tree(config: &Config) -> Result<CategoryTree, CliError> {
    let tree = match &config.site_resolved.categories {
        Some(path) => CategoryTree::load(path)?,
        None => CategoryTree::builtin()?,
    };
    tracing::debug!(nodes = tree.len(), "Category tree ready");
    Ok(tree)
}
