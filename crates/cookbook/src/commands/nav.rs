//! `cookbook nav` command implementation.

use clap::Args;
use cookbook_config::CliSettings;
use cookbook_site::Navigation;

use super::{SourceArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Current path to resolve (e.g., /auth/client-side).
    path: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or categories fail to load.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load_config(CliSettings::default())?;
        let tree = load_tree(&config)?;

        let navigation = Navigation::resolve(&tree, &self.path);
        output.data(&serde_json::to_string_pretty(&navigation)?)?;

        Ok(())
    }
}
