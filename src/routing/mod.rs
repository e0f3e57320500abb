//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (fixed table lookup)
//!     → Serve SPA entry document, a named static file,
//!       or a widget document with framing disabled
//!
//! Table Compilation (at startup):
//!     register()
//!     → Mount handlers and per-route middleware
//!     → Freeze as immutable axum Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same path always resolves the same way
//! - First match wins; no-match delegates to the framework 404

pub mod router;

pub use router::register;
