//! DTOs for the lead submission endpoint.

use crate::domain::entities::{CompanySize, Lead};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Compiled regex for the email shape check: `local@domain.tld`.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One contact-form submission, as posted by the client.
///
/// Missing fields deserialize to empty strings so that requiredness is
/// reported by [`Validate`] with the form's own messages instead of a
/// deserialization rejection. The same `validate()` runs client-side before
/// the request is sent and server-side before the record store is called.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitLeadRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub company: String,

    #[serde(default)]
    #[validate(custom(function = "validate_company_size"))]
    pub company_size: String,

    #[serde(default)]
    pub challenge: Option<String>,
}

impl SubmitLeadRequest {
    /// Builds the domain entity from an already-validated request.
    ///
    /// Trims every field; blank optionals collapse to `None`.
    pub fn into_lead(self) -> Lead {
        // validate() guarantees membership in the closed set.
        let company_size =
            CompanySize::parse(self.company_size.trim()).unwrap_or(CompanySize::OneToFive);

        Lead {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone),
            company: self.company.trim().to_string(),
            company_size,
            challenge: non_blank(self.challenge),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_error() -> ValidationError {
    ValidationError::new("required").with_message("All required fields must be filled.".into())
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required_error());
    }
    Ok(())
}

fn validate_email_shape(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(required_error());
    }
    if !EMAIL_REGEX.is_match(trimmed) {
        return Err(
            ValidationError::new("email_shape").with_message("Invalid email address.".into())
        );
    }
    Ok(())
}

fn validate_company_size(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(required_error());
    }
    if CompanySize::parse(trimmed).is_none() {
        return Err(
            ValidationError::new("company_size").with_message("Invalid company size.".into())
        );
    }
    Ok(())
}

/// Response for the submission endpoint.
///
/// Deserialize is for the client half, which parses the same shape back.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitLeadResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "notionPageId", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub notion_page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub details: Option<String>,
}

impl SubmitLeadResponse {
    /// The fixed success payload, carrying the created record's id.
    pub fn created(page_id: String) -> Self {
        Self {
            success: true,
            message: "Lead submitted successfully".to_string(),
            notion_page_id: Some(page_id),
            details: None,
        }
    }
}
