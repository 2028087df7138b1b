//! Cookbook CLI - recipe site navigation.
//!
//! Provides commands for:
//! - `serve`: Start the navigation API server
//! - `nav`: Print resolved navigation for a path
//! - `check`: Validate the category tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, ServeArgs};
use output::Output;

/// Cookbook - recipe site navigation.
#[derive(Parser)]
#[command(name = "cookbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the navigation API server.
    Serve(ServeArgs),
    /// Print the resolved sidebar for a path as JSON.
    Nav(NavArgs),
    /// Validate the category tree.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute()),
            Err(err) => Err(err.into()),
        },
        Commands::Nav(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
