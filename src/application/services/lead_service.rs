//! Lead submission service.

use std::sync::Arc;

use crate::domain::entities::{Lead, LeadRecord};
use crate::domain::repositories::LeadRepository;
use crate::error::AppError;
use crate::infrastructure::email::Notifier;
use metrics::counter;

/// Service orchestrating one lead submission.
///
/// Creates the record first, then attempts the notification. Notification
/// failures are logged and counted but never fail the submission: the
/// record already exists, so the client is told the truth — it succeeded.
pub struct LeadService {
    repository: Arc<dyn LeadRepository>,
    notifier: Arc<dyn Notifier>,
}

impl LeadService {
    /// Creates a new lead service.
    pub fn new(repository: Arc<dyn LeadRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Stores one lead and best-effort notifies a human.
    ///
    /// Each external call is attempted exactly once; there is no retry or
    /// queueing. Two identical submissions create two distinct records.
    ///
    /// # Errors
    ///
    /// Propagates record-store faults only. See
    /// [`LeadRepository::create`] for the mapping.
    pub async fn submit(&self, lead: Lead) -> Result<LeadRecord, AppError> {
        let record = self.repository.create(&lead).await?;
        counter!("leads_submitted_total").increment(1);

        if let Err(e) = self.notifier.notify(&lead, &record).await {
            counter!("lead_notifications_failed_total").increment(1);
            tracing::warn!(
                provider = self.notifier.provider(),
                error = %e,
                "lead notification failed (non-fatal)"
            );
        }

        Ok(record)
    }

    /// Label of the configured notification provider.
    pub fn notifier_provider(&self) -> &'static str {
        self.notifier.provider()
    }
}
