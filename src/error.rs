use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Generic client-facing message for faults whose detail must stay internal.
pub const GENERIC_FAILURE: &str =
    "Something went wrong. Please try again or contact us directly.";

/// Wire shape shared by every non-2xx response.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Application error translated to an HTTP status + `{success:false, ...}` body.
///
/// Every fault is handled at the boundary where it occurs; nothing propagates
/// past the request handler.
#[derive(Debug)]
pub enum AppError {
    /// Client input failed a field check. 400, actionable message.
    Validation { message: String },
    /// The record store rejected the property payload. 400, with the
    /// store's own message surfaced in `details`.
    UpstreamValidation { message: String, details: String },
    /// Endpoint reached with a method other than POST/OPTIONS. 405.
    MethodNotAllowed,
    /// Required record-store credentials are absent. 500, generic message.
    Misconfigured,
    /// Known record-store fault (database missing, authorization). 500 with
    /// a tailored, non-internal message.
    RecordStore { message: String },
    /// Anything unrecognized. 500; `detail` is logged, never sent.
    Internal { detail: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream_validation(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::UpstreamValidation {
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn misconfigured() -> Self {
        Self::Misconfigured
    }

    pub fn record_store(message: impl Into<String>) -> Self {
        Self::RecordStore {
            message: message.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::UpstreamValidation { message, details } => {
                (StatusCode::BAD_REQUEST, message, Some(details))
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed. Use POST.".to_string(),
                None,
            ),
            AppError::Misconfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration incomplete. Please contact support.".to_string(),
                None,
            ),
            AppError::RecordStore { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
            AppError::Internal { detail } => {
                tracing::error!(detail = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE.to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Collapses field errors into one actionable message.
///
/// Requiredness wins over shape checks so a blank email reads as a missing
/// field, matching the client-side ordering.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    let first_with_code = |code: &str| {
        field_errors
            .values()
            .flat_map(|errs| errs.iter())
            .find(|e| e.code == code)
            .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
    };

    first_with_code("required")
        .or_else(|| first_with_code("email_shape"))
        .or_else(|| first_with_code("company_size"))
        .or_else(|| {
            field_errors
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .unwrap_or_else(|| "Invalid request.".to_string())
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request(validation_message(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn errors_with(field: &'static str, code: &'static str, message: &'static str) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new(code).with_message(message.into()));
        errors
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::upstream_validation("x", "y").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::misconfigured().into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::record_store("x").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_requiredness_wins_over_shape_checks() {
        let mut errors = errors_with("email", "email_shape", "Invalid email address.");
        errors.add(
            "name",
            ValidationError::new("required").with_message("All required fields must be filled.".into()),
        );

        assert_eq!(
            validation_message(&errors),
            "All required fields must be filled."
        );
    }

    #[test]
    fn test_single_field_message_passes_through() {
        let errors = errors_with("company_size", "company_size", "Invalid company size.");
        assert_eq!(validation_message(&errors), "Invalid company size.");
    }
}
