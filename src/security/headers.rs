//! Frame-embedding header control.
//!
//! # Responsibilities
//! - Apply the default framing protection to every response
//! - Strip `X-Frame-Options` on the embeddable widget routes
//!
//! # Design Decisions
//! - Removal runs after the inner service and completes before the response
//!   reaches the transport; headers are final before any body byte is written
//! - Removal is unconditional on the routes it is mounted on; every other
//!   route keeps the default protection
//! - Idempotent: stripping an absent header is a no-op

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::set_header::SetResponseHeaderLayer;

/// Default framing protection applied to every route.
///
/// Leaves the header alone if a handler already set one.
pub fn frameguard() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    )
}

/// Strip `X-Frame-Options` so the page can be embedded in a third-party
/// iframe.
///
/// Mounted outside [`frameguard`] on the widget routes, so the header set on
/// the way out is removed again before the response leaves.
pub async fn remove_frameguard(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().remove(header::X_FRAME_OPTIONS);
    response
}
