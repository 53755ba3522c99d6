//! Notifier trait and error types.

use crate::domain::entities::{Lead, LeadRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while sending a notification.
///
/// These never surface to the submitting client; the submission handler
/// logs them and reports success regardless, because the record was already
/// created when notification starts.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The request never produced a response.
    #[error("email request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("email provider rejected the send: status {status}: {body}")]
    Provider { status: u16, body: String },
}

/// Result type for notification sends.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Trait for alerting a human about a new lead.
///
/// Implementations must be thread-safe and are invoked exactly once per
/// submission, after the record store call succeeded.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::SendGridNotifier`] - SendGrid v3 mail send
/// - [`crate::infrastructure::email::ResendNotifier`] - Resend emails API
/// - [`crate::infrastructure::email::NullNotifier`] - No-op when neither credential is present
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one notification summarizing the lead, linking the created record.
    async fn notify(&self, lead: &Lead, record: &LeadRecord) -> NotifierResult<()>;

    /// Short provider label for logs and health reporting.
    fn provider(&self) -> &'static str;
}
