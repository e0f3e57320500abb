//! Explorer web shell entry point.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xchain_web::config;
use xchain_web::http::{AssetPaths, HttpServer};
use xchain_web::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xchain_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("xchain-web v0.1.0 starting");

    // Load configuration: defaults plus environment overrides
    let config = match config::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration invalid, refusing to start");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        primary_endpoint = %config.chain_client.http_endpoint,
        producer_list = %config.producer_list_url,
        cron_enabled = config.cron.enabled,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, AssetPaths::default());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
