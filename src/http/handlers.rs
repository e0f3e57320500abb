//! File-serving handlers.
//!
//! # Responsibilities
//! - Serve the SPA entry document for every virtual route
//! - Serve the named static resources (sitemap, robots, test widget)
//!
//! # Design Decisions
//! - Documents are read per request; the read may suspend, locally to that
//!   request, with no cross-request ordering
//! - A missing document is a 404, never a panic
//! - The configuration rides along in state for the handlers' contract but
//!   is not read here

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;

/// Resolved locations of the served documents.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// SPA entry document.
    pub index: PathBuf,

    /// Crawler sitemap.
    pub sitemap: PathBuf,

    /// Crawler policy.
    pub robots: PathBuf,

    /// Standalone widget test page.
    pub test_widget: PathBuf,
}

impl AssetPaths {
    /// Resolve the document locations under the given root directory.
    pub fn from_root(root: &Path) -> Self {
        Self {
            index: root.join("dist").join("index.html"),
            sitemap: root.join("sitemap.xml"),
            robots: root.join("robots.txt"),
            test_widget: root.join("test_widget").join("index.html"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::from_root(Path::new("."))
    }
}

/// Serve the SPA entry document.
///
/// The same bytes answer every virtual route, whatever path parameters were
/// supplied; the frontend's client-side router takes over from there.
pub async fn spa_index(State(state): State<AppState>) -> Response {
    send_file(&state.assets.index, "text/html; charset=utf-8").await
}

/// Serve the standalone widget test page.
pub async fn test_widget(State(state): State<AppState>) -> Response {
    send_file(&state.assets.test_widget, "text/html; charset=utf-8").await
}

/// Serve the sitemap verbatim.
pub async fn sitemap(State(state): State<AppState>) -> Response {
    send_file(&state.assets.sitemap, "application/xml").await
}

/// Serve the robots policy verbatim.
pub async fn robots(State(state): State<AppState>) -> Response {
    send_file(&state.assets.robots, "text/plain; charset=utf-8").await
}

async fn send_file(path: &Path, content_type: &'static str) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Document not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
