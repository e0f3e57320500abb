//! HTTP server setup.
//!
//! # Responsibilities
//! - Compile the route table and middleware stack
//! - Tag every request with an x-request-id
//! - Serve with graceful shutdown

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers::AssetPaths;
use crate::routing;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration. Held for the handlers' contract; the current
    /// ones serve fixed documents and leave it unread.
    pub config: Arc<AppConfig>,

    /// Resolved locations of the served documents.
    pub assets: Arc<AssetPaths>,
}

/// HTTP server for the explorer shell.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig, assets: AssetPaths) -> Self {
        let state = AppState {
            config: Arc::new(config),
            assets: Arc::new(assets),
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        routing::register(state).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = shutdown.recv() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
