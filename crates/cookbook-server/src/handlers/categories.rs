//! Categories API endpoint.
//!
//! Returns the full category tree in display order.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use cookbook_site::CategoryNode;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/categories.
#[derive(Serialize)]
pub(crate) struct CategoriesResponse {
    /// Top-level categories with their children.
    items: Vec<CategoryNode>,
}

/// Handle GET /api/categories.
pub(crate) async fn get_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let items = state.site.categories().to_vec();
    Json(CategoriesResponse { items })
}
