//! No-op notifier for deployments without an email provider.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::service::{Notifier, NotifierResult};
use crate::domain::entities::{Lead, LeadRecord};

/// A notifier that skips every send.
///
/// Used when neither provider credential is present. Each skipped send logs
/// a warning so the missing configuration stays visible in production logs,
/// and the submission outcome is unaffected.
pub struct NullNotifier;

impl NullNotifier {
    /// Creates a new NullNotifier instance.
    pub fn new() -> Self {
        debug!("Using NullNotifier (email notifications disabled)");
        Self
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _lead: &Lead, _record: &LeadRecord) -> NotifierResult<()> {
        warn!("No email provider configured; skipping lead notification");
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "disabled"
    }
}
