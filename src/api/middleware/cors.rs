//! Cross-origin resource sharing configuration.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for the public lead endpoint.
///
/// The form is served from arbitrary marketing pages, so any origin may
/// POST. Only `Content-Type` is accepted as a request header.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
