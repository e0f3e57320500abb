//! Route table construction.
//!
//! # Responsibilities
//! - Register the fixed path table against the serving handlers
//! - Mount the frame-header middleware on the widget routes
//!
//! # Design Decisions
//! - The table is compiled once at startup, immutable at runtime
//! - Path parameters are accepted and deliberately ignored; the SPA's own
//!   client-side router interprets them after load
//! - Unmatched paths fall through to the framework 404

use axum::{middleware, routing::get, Router};

use crate::http::handlers::{robots, sitemap, spa_index, test_widget};
use crate::http::server::AppState;
use crate::security::headers::{frameguard, remove_frameguard};

/// Build the route table.
///
/// Every virtual SPA path resolves to the same entry document. The two
/// widget routes additionally shed `X-Frame-Options` so they can be embedded
/// off-site: their removal middleware wraps outside the frameguard layer,
/// stripping the header the inner layer set.
pub fn register(state: AppState) -> Router {
    let widgets = Router::new()
        .route("/widget/ram", get(spa_index))
        .route("/test/widget", get(test_widget))
        .layer(frameguard())
        .layer(middleware::from_fn(remove_frameguard));

    Router::new()
        .route("/", get(spa_index))
        .route("/block/{id}", get(spa_index))
        .route("/xchain/{id}", get(spa_index))
        .route("/pubkey/{id}", get(spa_index))
        .route("/producers", get(spa_index))
        .route("/wallet", get(spa_index))
        .route("/vote", get(spa_index))
        .route("/tokens", get(spa_index))
        .route("/notfound", get(spa_index))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .layer(frameguard())
        .merge(widgets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::http::handlers::AssetPaths;

    fn app() -> Router {
        // No documents on disk; enough for route-matching assertions.
        let root = std::env::temp_dir().join("xchain-web-router-tests");
        register(AppState {
            config: Arc::new(AppConfig::default()),
            assets: Arc::new(AssetPaths::from_root(&root)),
        })
    }

    #[tokio::test]
    async fn test_unregistered_path_falls_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/unregistered-path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_registered_path_resolves_without_document() {
        // The route matches even when the document is missing; the handler
        // answers 404 itself rather than falling through.
        let response = app()
            .oneshot(Request::builder().uri("/wallet").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::X_FRAME_OPTIONS)
                .unwrap(),
            "SAMEORIGIN"
        );
    }
}
