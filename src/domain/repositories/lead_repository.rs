//! Repository trait for lead record creation.

use crate::domain::entities::{Lead, LeadRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the external lead record store.
///
/// One operation: create a record for a validated lead. The store assigns
/// the record's durable identity; this system never reads it back.
///
/// # Implementations
///
/// - [`crate::infrastructure::notion::NotionLeadRepository`] - Notion implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Creates one record for the lead.
    ///
    /// Attempted exactly once per submission; no retry on failure.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamValidation`] when the store rejects the
    /// property payload, [`AppError::RecordStore`] for known store faults
    /// (database missing, authorization), and [`AppError::Internal`] for
    /// anything unrecognized.
    async fn create(&self, lead: &Lead) -> Result<LeadRecord, AppError>;
}
