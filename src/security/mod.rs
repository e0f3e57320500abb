//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → frameguard layer (default X-Frame-Options on every route)
//!     → remove_frameguard (widget routes only; strips the header again)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Framing protection is the default; embeddability is opt-in per route
//! - No origin checks on the widget routes: embedding them anywhere is the
//!   point

pub mod headers;
