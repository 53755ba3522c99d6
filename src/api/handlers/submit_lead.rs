//! Handler for the lead submission endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::submit_lead::{SubmitLeadRequest, SubmitLeadResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts one contact-form submission.
///
/// # Endpoint
///
/// `POST /api/submit-lead`
///
/// # Processing Order
///
/// 1. Configuration check - missing record-store credentials short-circuit
///    to 500 before the payload is even validated
/// 2. Field validation - requiredness, email shape, company-size set
/// 3. Record creation - one call to the record store
/// 4. Best-effort notification - failure never downgrades the response
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "phone": "+1 555 0100",
///   "company": "Acme",
///   "company_size": "6-20",
///   "challenge": "Manual reporting"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Lead submitted successfully",
///   "notionPageId": "…"
/// }
/// ```
///
/// # Errors
///
/// 400 for field or record-store validation faults, 500 for
/// misconfiguration and unrecoverable store faults.
pub async fn submit_lead_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitLeadRequest>,
) -> Result<Json<SubmitLeadResponse>, AppError> {
    let Some(service) = state.lead_service.as_ref() else {
        tracing::error!("record-store credentials missing; rejecting submission");
        return Err(AppError::misconfigured());
    };

    payload.validate()?;

    let record = service.submit(payload.into_lead()).await?;

    Ok(Json(SubmitLeadResponse::created(record.id)))
}

/// Answers bare CORS preflights with an empty 200.
///
/// Preflights carrying `Origin` + request-method headers are already
/// short-circuited by the CORS layer; this covers plain OPTIONS probes.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// JSON 405 for anything that is not POST or OPTIONS.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
