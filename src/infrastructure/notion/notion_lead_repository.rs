//! Notion implementation of the lead repository.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::{Lead, LeadRecord};
use crate::domain::repositories::LeadRepository;
use crate::error::AppError;
use crate::infrastructure::notion::properties::lead_properties;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"unauthorized"`, the
/// store's fault vocabulary is encoded in the type system and translated to
/// [`AppError`] in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// The target database does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// API rate limit exceeded
    RateLimited,
    /// An error code this client doesn't recognize
    Unknown(String),
}

impl NotionErrorCode {
    /// Parses a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "validation_error" => Self::ValidationFailed,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "rate_limited" => Self::RateLimited,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Translates a Notion fault into the HTTP-facing error.
///
/// Known codes get tailored statuses; everything else collapses to a
/// generic 500 with the detail kept server-side.
pub fn map_notion_error(code: NotionErrorCode, message: String) -> AppError {
    match code {
        NotionErrorCode::ValidationFailed => {
            AppError::upstream_validation("Invalid data format for the record store.", message)
        }
        NotionErrorCode::ObjectNotFound => {
            AppError::record_store("Leads database not found. Please contact support.")
        }
        NotionErrorCode::Unauthorized | NotionErrorCode::RestrictedResource => {
            AppError::record_store("Record store authentication failed. Please contact support.")
        }
        NotionErrorCode::RateLimited => {
            AppError::internal(format!("notion rate limited: {message}"))
        }
        NotionErrorCode::Unknown(code) => {
            AppError::internal(format!("unrecognized notion fault {code}: {message}"))
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedPage {
    id: String,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Notion-backed lead repository.
///
/// A thin wrapper around reqwest with the Notion auth and version headers
/// installed once at construction. Explicitly constructed and injected, so
/// handlers stay testable without real credentials.
pub struct NotionLeadRepository {
    http: Client,
    database_id: String,
}

impl NotionLeadRepository {
    /// Creates a repository targeting one leads database.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot form a valid header value or
    /// the HTTP client fails to build.
    pub fn new(api_key: &str, database_id: String) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {api_key}");
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header)
                .map_err(|e| AppError::internal(format!("invalid API key format: {e}")))?,
        );
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, database_id })
    }
}

#[async_trait]
impl LeadRepository for NotionLeadRepository {
    async fn create(&self, lead: &Lead) -> Result<LeadRecord, AppError> {
        let body = json!({
            "parent": { "database_id": self.database_id },
            "properties": lead_properties(lead),
        });

        tracing::debug!(database_id = %self.database_id, "POST {API_BASE_URL}/pages");

        let response = self
            .http
            .post(format!("{API_BASE_URL}/pages"))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("notion request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            let page: CreatedPage = response
                .json()
                .await
                .map_err(|e| AppError::internal(format!("unreadable notion response: {e}")))?;

            tracing::info!(page_id = %page.id, "lead record created");
            return Ok(LeadRecord {
                id: page.id,
                url: page.url,
            });
        }

        let fault: NotionErrorBody = response.json().await.unwrap_or_default();
        tracing::error!(
            status = %status,
            code = %fault.code,
            message = %fault.message,
            "notion rejected the record"
        );

        if fault.code.is_empty() {
            // Unparseable error body; fall back to the HTTP status.
            return Err(fall_back_on_status(status));
        }

        Err(map_notion_error(
            NotionErrorCode::from_api_response(&fault.code),
            fault.message,
        ))
    }
}

fn fall_back_on_status(status: StatusCode) -> AppError {
    map_notion_error(
        NotionErrorCode::Unknown(format!("http_{}", status.as_u16())),
        String::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_vocabulary() {
        assert_eq!(
            NotionErrorCode::from_api_response("validation_error"),
            NotionErrorCode::ValidationFailed
        );
        assert_eq!(
            NotionErrorCode::from_api_response("object_not_found"),
            NotionErrorCode::ObjectNotFound
        );
        assert_eq!(
            NotionErrorCode::from_api_response("unauthorized"),
            NotionErrorCode::Unauthorized
        );
        assert_eq!(
            NotionErrorCode::from_api_response("mystery"),
            NotionErrorCode::Unknown("mystery".to_string())
        );
    }

    #[test]
    fn test_validation_fault_maps_to_bad_request_with_details() {
        let err = map_notion_error(
            NotionErrorCode::ValidationFailed,
            "Email is expected to be email.".to_string(),
        );
        assert!(matches!(err, AppError::UpstreamValidation { .. }));
    }

    #[test]
    fn test_known_faults_map_to_tailored_500s() {
        assert!(matches!(
            map_notion_error(NotionErrorCode::ObjectNotFound, String::new()),
            AppError::RecordStore { .. }
        ));
        assert!(matches!(
            map_notion_error(NotionErrorCode::Unauthorized, String::new()),
            AppError::RecordStore { .. }
        ));
        assert!(matches!(
            map_notion_error(NotionErrorCode::RestrictedResource, String::new()),
            AppError::RecordStore { .. }
        ));
    }

    #[test]
    fn test_unknown_faults_stay_internal() {
        assert!(matches!(
            map_notion_error(NotionErrorCode::Unknown("weird".to_string()), String::new()),
            AppError::Internal { .. }
        ));
        assert!(matches!(
            fall_back_on_status(StatusCode::BAD_GATEWAY),
            AppError::Internal { .. }
        ));
    }

    #[test]
    fn test_repository_rejects_unprintable_api_key() {
        assert!(NotionLeadRepository::new("bad\nkey", "db".to_string()).is_err());
    }
}
