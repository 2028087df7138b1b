//! Navigation API endpoint.
//!
//! Resolves the sidebar for the path the frontend is currently showing.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use cookbook_site::Navigation;
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for GET /api/navigation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationQuery {
    /// Current route (e.g., "/auth/login").
    #[serde(default)]
    path: String,
}

/// Handle GET /api/navigation?path=...
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Json<Navigation> {
    Json(state.site.navigation(&query.path))
}
