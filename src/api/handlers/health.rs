//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: record store configured
/// - **503 Service Unavailable**: record store credentials missing
///
/// A disabled notifier is reported but does not degrade health, because
/// notification is best-effort by contract.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let record_store_check = check_record_store(&state);
    let notifier_check = check_notifier(&state);

    let healthy = record_store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            record_store: record_store_check,
            notifier: notifier_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports whether the record store is configured.
fn check_record_store(state: &AppState) -> CheckStatus {
    if state.lead_service.is_some() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Record store configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Record store credentials missing".to_string()),
        }
    }
}

/// Reports which notification provider is active.
fn check_notifier(state: &AppState) -> CheckStatus {
    let provider = state
        .lead_service
        .as_ref()
        .map(|s| s.notifier_provider())
        .unwrap_or("unknown");

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Provider: {provider}")),
    }
}
