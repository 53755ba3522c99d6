//! API route configuration.

use crate::api::handlers::{
    method_not_allowed_handler, preflight_handler, submit_lead_handler,
};
use crate::state::AppState;
use axum::{Router, routing::post};

/// The public lead-capture routes.
///
/// # Endpoints
///
/// - `POST    /submit-lead` - Accept one contact-form submission
/// - `OPTIONS /submit-lead` - Empty 200 for preflight probes
/// - any other method       - JSON 405
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/submit-lead",
        post(submit_lead_handler)
            .options(preflight_handler)
            .fallback(method_not_allowed_handler),
    )
}
