//! Pages API endpoint.
//!
//! Returns page metadata (title) for the page head. Titles are passed
//! through exactly as the category tree declares them.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cookbook_site::PageMeta;

use crate::error::ServerError;
use crate::handlers::to_category_path;
use crate::state::AppState;

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageMeta>, ServerError> {
    let path = to_category_path(&path);
    match state.site.page_meta(&path) {
        Some(meta) => Ok(Json(meta)),
        None => {
            tracing::warn!(path = %path, "Page metadata requested for unknown path");
            Err(ServerError::PageNotFound(path))
        }
    }
}
