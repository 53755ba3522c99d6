//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/submit-lead` - Lead submission (public, CORS-open)
//! - `GET  /health`          - Component health check (public)
//!
//! # Middleware
//!
//! - **CORS** - Any origin, `POST`/`OPTIONS`, `Content-Type`
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied at serve time in
/// [`crate::server::run`], keeping this router directly drivable in tests.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::public_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
