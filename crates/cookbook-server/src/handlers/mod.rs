//! HTTP request handlers.

pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod navigation;
pub(crate) mod pages;

/// Convert a wildcard route capture (without leading slash) to a category path.
///
/// Axum captures `/api/pages/auth/login` as `auth/login`, while category
/// paths carry the leading slash (`/auth/login`).
pub(crate) fn to_category_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
