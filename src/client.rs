//! Client half of the lead form.
//!
//! [`LeadFormClient`] performs the form controller's network contract: the
//! same local validation the server enforces, exactly one JSON POST, and a
//! parsed server message (or a generic fallback) for feedback rendering.
//! The interactive form in `src/bin/submit.rs` drives it.

use thiserror::Error;
use validator::Validate;

use crate::api::dto::submit_lead::{SubmitLeadRequest, SubmitLeadResponse};
use crate::error::{GENERIC_FAILURE, validation_message};

/// Failure modes of one submission attempt.
///
/// Every variant carries a user-renderable message; the form prints it and
/// stops. There is no retry — the user resubmits.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Local validation failed; no network call was issued.
    #[error("{0}")]
    Invalid(String),

    /// The request never reached a response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered non-2xx; carries its message or the fallback.
    #[error("{0}")]
    Rejected(String),
}

/// HTTP client for the lead submission endpoint.
pub struct LeadFormClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LeadFormClient {
    /// Creates a client against a server base URL (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/submit-lead", base_url.trim_end_matches('/')),
        }
    }

    /// The resolved endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one lead.
    ///
    /// Validates locally first — an invalid form never produces a network
    /// call. On success returns the server's response body, including the
    /// created record id.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] on local validation failure,
    /// [`SubmitError::Transport`] when no response arrives, and
    /// [`SubmitError::Rejected`] for any non-2xx status.
    pub async fn submit(
        &self,
        request: &SubmitLeadRequest,
    ) -> Result<SubmitLeadResponse, SubmitError> {
        request
            .validate()
            .map_err(|e| SubmitError::Invalid(validation_message(&e)))?;

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body: Option<SubmitLeadResponse> = response.json().await.ok();

        if !status.is_success() {
            let message = body
                .map(|b| b.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(SubmitError::Rejected(message));
        }

        Ok(body.unwrap_or(SubmitLeadResponse {
            success: true,
            message: "Lead submitted successfully".to_string(),
            notion_page_id: None,
            details: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitLeadRequest {
        SubmitLeadRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            company: "Acme".to_string(),
            company_size: "1-5".to_string(),
            challenge: None,
        }
    }

    #[test]
    fn test_endpoint_construction() {
        let client = LeadFormClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/api/submit-lead");
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        // The endpoint is unroutable; an attempted call would fail with
        // Transport, so Invalid proves validation short-circuited.
        let client = LeadFormClient::new("http://192.0.2.1:1");

        let mut request = valid_request();
        request.email = "abc.com".to_string();

        match client.submit(&request).await {
            Err(SubmitError::Invalid(message)) => {
                assert_eq!(message, "Invalid email address.");
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_required_field_message() {
        let client = LeadFormClient::new("http://192.0.2.1:1");

        let mut request = valid_request();
        request.company = String::new();

        match client.submit(&request).await {
            Err(SubmitError::Invalid(message)) => {
                assert_eq!(message, "All required fields must be filled.");
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }
}
