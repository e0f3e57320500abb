//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled defaults
//!     → loader.rs (apply environment overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - The environment is read exactly once, at startup
//! - Validation separates syntactic (URL parsing) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::AppConfig;
pub use schema::ChainClientConfig;
pub use schema::CronConfig;
pub use schema::ListenerConfig;
