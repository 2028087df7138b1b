//! `cookbook serve` command implementation.

use std::sync::Arc;

use clap::Args;
use cookbook_config::CliSettings;
use cookbook_server::{ServerConfig, run_server};

use super::{SourceArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and startup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or categories fail to load, or the
    /// server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            host: self.host,
            port: self.port,
            categories: None,
        };
        let config = self.source.load_config(settings)?;
        let tree = Arc::new(load_tree(&config)?);

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        match &config.site_resolved.categories {
            Some(path) => output.info(&format!("Categories: {}", path.display())),
            None => output.info("Categories: built-in"),
        }

        run_server(ServerConfig::from(&config), tree).await?;

        Ok(())
    }
}
