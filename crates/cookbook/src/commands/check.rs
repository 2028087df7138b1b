//! `cookbook check` command implementation.

use clap::Args;
use cookbook_config::CliSettings;

use super::{SourceArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the category tree
    /// is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load_config(CliSettings::default())?;
        let tree = load_tree(&config)?;

        if tree.is_empty() {
            output.warning("Category tree is empty");
            return Ok(());
        }

        output.success(&format!(
            "Category tree OK: {} categories, {} nodes",
            tree.list_top_level().len(),
            tree.len()
        ));

        Ok(())
    }
}
