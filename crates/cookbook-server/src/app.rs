//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/categories", get(handlers::categories::get_categories))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use cookbook_site::{CategoryNode, CategoryTree, Site};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn create_test_router() -> Router {
        let tree = CategoryTree::new(vec![
            CategoryNode::new("/a", "A")
                .with_icon("book")
                .with_children(vec![CategoryNode::new("/a/x", "X")]),
            CategoryNode::new("/b", "B"),
        ])
        .unwrap();
        let state = Arc::new(AppState {
            site: Site::new(Arc::new(tree), "Test Cookbook"),
        });
        create_router(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = create_test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_navigation_exact_match() {
        let (status, body) = get_json("/api/navigation?path=/a").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "categories": [
                    {"path": "/a", "title": "A", "icon": "book", "active": true},
                    {"path": "/b", "title": "B", "active": false}
                ],
                "children": [
                    {"path": "/a/x", "title": "X", "active": false}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_navigation_child_path() {
        let (_, body) = get_json("/api/navigation?path=/a/x").await;

        assert_eq!(body["categories"][0]["active"], true);
        assert_eq!(body["children"], json!([]));
    }

    #[tokio::test]
    async fn test_navigation_without_path() {
        let (status, body) = get_json("/api/navigation").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][0]["active"], false);
        assert_eq!(body["categories"][1]["active"], false);
        assert_eq!(body["children"], json!([]));
    }

    #[tokio::test]
    async fn test_categories() {
        let (status, body) = get_json("/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["path"], "/a");
        assert_eq!(body["items"][0]["children"][0]["title"], "X");
        assert_eq!(body["items"][1]["path"], "/b");
    }

    #[tokio::test]
    async fn test_page_meta() {
        let (status, body) = get_json("/api/pages/a/x").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"path": "/a/x", "title": "X"}));
    }

    #[tokio::test]
    async fn test_page_meta_not_found() {
        let (status, body) = get_json("/api/pages/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Page not found");
        assert_eq!(body["path"], "/missing");
    }

    #[tokio::test]
    async fn test_config() {
        let (_, body) = get_json("/api/config").await;

        assert_eq!(body["title"], "Test Cookbook");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"].to_str().unwrap(), "nosniff");
        assert_eq!(headers["x-frame-options"].to_str().unwrap(), "DENY");
        assert!(headers.contains_key("content-security-policy"));
    }
}
