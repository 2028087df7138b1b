//! HTTP server for Cookbook navigation.
//!
//! This crate serves the category tree and resolved sidebar navigation as
//! JSON for the presentation layer:
//!
//! - `GET /api/config` - site title
//! - `GET /api/categories` - full category tree
//! - `GET /api/navigation?path=/auth` - sidebar for the current path
//! - `GET /api/pages/{*path}` - page metadata (title)
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cookbook_server::{ServerConfig, run_server};
//! use cookbook_site::CategoryTree;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7979,
//!         title: "Cookbook".to_string(),
//!     };
//!     let tree = Arc::new(CategoryTree::builtin().unwrap());
//!
//!     run_server(config, tree).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use cookbook_site::{CategoryTree, Site};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site title.
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            title: "Cookbook".to_owned(),
        }
    }
}

impl From<&cookbook_config::Config> for ServerConfig {
    fn from(config: &cookbook_config::Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            title: config.site_resolved.title.clone(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// The category tree is constructed by the caller and shared read-only by
/// every request.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig, tree: Arc<CategoryTree>) -> Result<(), ServerError> {
    let nodes = tree.len();
    let state = Arc::new(AppState {
        site: Site::new(tree, config.title),
    });

    let app = app::create_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&address).map_err(|_| ServerError::InvalidAddress(address))?;
    tracing::info!(address = %addr, nodes, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
