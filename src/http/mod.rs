//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, request id, trace)
//!     → [route table resolves the path]
//!     → handlers.rs (read document, set content type)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use handlers::AssetPaths;
pub use server::{AppState, HttpServer};
