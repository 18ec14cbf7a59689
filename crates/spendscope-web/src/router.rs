//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::dashboard::dashboard;
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    let static_files = ServeDir::new(&shared.layout.static_root);

    Router::new()
        .route("/", get(dashboard))

        // Chart fragments and images referenced by the page
        .nest_service("/static", static_files)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use spendscope_config::AssetLayout;
    use tower::ServiceExt;

    fn populated_layout(dir: &tempfile::TempDir) -> AssetLayout {
        let layout = AssetLayout::with_root(dir.path().join("static"));
        std::fs::create_dir_all(layout.graphs_path()).unwrap();
        std::fs::create_dir_all(layout.images_path()).unwrap();
        for file in &layout.graphs {
            std::fs::write(layout.graphs_path().join(file), format!("<div class=\"chart\">{file}</div>")).unwrap();
        }
        for file in &layout.images {
            std::fs::write(layout.images_path().join(file), b"jpeg-bytes").unwrap();
        }
        layout
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_dashboard_lists_every_allow_listed_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = populated_layout(&dir);
        let app = build_router(AppState::new(layout.clone()).unwrap());

        let (status, page) = get_page(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.matches("class=\"card graph-card\"").count(), layout.graphs.len());
        assert_eq!(page.matches("class=\"card image-card\"").count(), layout.images.len());
        assert!(page.contains("<div class=\"chart\">expense_flow_sankey.html</div>"));
        assert!(page.contains("src=\"/static/images/Top_Vendors_By_anomoly.jpg\""));
        assert!(page.contains("Top Vendors By Anomoly"));
    }

    #[tokio::test]
    async fn test_dashboard_renders_with_nothing_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::with_root(dir.path().join("static"));
        let app = build_router(AppState::new(layout).unwrap());

        let (status, page) = get_page(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("No charts available."));
        assert!(page.contains("No images available."));
    }

    #[tokio::test]
    async fn test_dashboard_drops_removed_image_only() {
        let dir = tempfile::tempdir().unwrap();
        let layout = populated_layout(&dir);
        std::fs::remove_file(layout.images_path().join("Payment_Trend.jpg")).unwrap();
        let app = build_router(AppState::new(layout.clone()).unwrap());

        let (_, page) = get_page(app, "/").await;
        assert_eq!(page.matches("class=\"card image-card\"").count(), layout.images.len() - 1);
        assert_eq!(page.matches("class=\"card graph-card\"").count(), layout.graphs.len());
        assert!(!page.contains("Payment_Trend.jpg"));
    }

    #[tokio::test]
    async fn test_static_images_are_served() {
        let dir = tempfile::tempdir().unwrap();
        let layout = populated_layout(&dir);
        let app = build_router(AppState::new(layout).unwrap());

        let (status, body) = get_page(app, "/static/images/Correlation_Matrix.jpg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "jpeg-bytes");
    }

    #[tokio::test]
    async fn test_unknown_static_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let layout = populated_layout(&dir);
        let app = build_router(AppState::new(layout).unwrap());

        let (status, _) = get_page(app, "/static/images/missing.jpg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
