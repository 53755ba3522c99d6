//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LeadService;

/// Immutable per-process state.
///
/// `lead_service` is `None` when the record-store credentials are absent;
/// the server still runs and the submission handler answers 500 per
/// request, mirroring the misconfiguration contract. No mutable state is
/// shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub lead_service: Option<Arc<LeadService>>,
}

impl AppState {
    /// Creates the state from an optional configured service.
    pub fn new(lead_service: Option<Arc<LeadService>>) -> Self {
        Self { lead_service }
    }
}
