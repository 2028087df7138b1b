//! Application state.
//!
//! Shared state for all request handlers.

use cookbook_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site with the immutable category tree.
    pub(crate) site: Site,
}
