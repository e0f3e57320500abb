//! Chain explorer web shell.
//!
//! Serves the single-page explorer frontend: every virtual client route
//! resolves to the SPA entry document, two widget routes shed their frame
//! protection for off-site embedding, and the crawler files are served
//! verbatim. The chain data API and the cron aggregation jobs are separate
//! services configured, not hosted, here.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod routing;
pub mod security;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
