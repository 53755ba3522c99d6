#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lead_capture::application::services::LeadService;
use lead_capture::domain::entities::{Lead, LeadRecord};
use lead_capture::domain::repositories::LeadRepository;
use lead_capture::error::AppError;
use lead_capture::infrastructure::email::{Notifier, NotifierError, NotifierResult};
use lead_capture::state::AppState;

/// What the stub record store should do on each create call.
#[derive(Debug, Clone, Copy)]
pub enum StubOutcome {
    /// Create a record with a fresh id per call.
    Success,
    /// Fault with the store's validation code (maps to 400 + details).
    UpstreamValidation,
    /// Fault with the database-missing code (maps to 500).
    DatabaseMissing,
    /// Fault with the authorization code (maps to 500).
    Unauthorized,
    /// Fault with a code this service does not recognize (maps to generic 500).
    UnknownFault,
}

/// In-memory record store standing in for Notion.
///
/// Counts calls so tests can assert which stages ran; ids increment so
/// repeated submissions visibly create distinct records.
pub struct StubLeadRepository {
    outcome: StubOutcome,
    pub calls: AtomicUsize,
}

impl StubLeadRepository {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeadRepository for StubLeadRepository {
    async fn create(&self, _lead: &Lead) -> Result<LeadRecord, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        match self.outcome {
            StubOutcome::Success => Ok(LeadRecord {
                id: format!("page-{call}"),
                url: format!("https://notion.so/page-{call}"),
            }),
            StubOutcome::UpstreamValidation => Err(AppError::upstream_validation(
                "Invalid data format for the record store.",
                "Email is expected to be email.",
            )),
            StubOutcome::DatabaseMissing => Err(AppError::record_store(
                "Leads database not found. Please contact support.",
            )),
            StubOutcome::Unauthorized => Err(AppError::record_store(
                "Record store authentication failed. Please contact support.",
            )),
            StubOutcome::UnknownFault => {
                Err(AppError::internal("unrecognized notion fault weird: boom"))
            }
        }
    }
}

/// Notifier that records calls and optionally fails every send.
pub struct RecordingNotifier {
    fail: bool,
    pub calls: AtomicUsize,
}

impl RecordingNotifier {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, _lead: &Lead, _record: &LeadRecord) -> NotifierResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            Err(NotifierError::Provider {
                status: 503,
                body: "provider unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn provider(&self) -> &'static str {
        "stub"
    }
}

/// Builds state around the given stubs, returning handles for assertions.
pub fn create_test_state(
    outcome: StubOutcome,
    notifier: RecordingNotifier,
) -> (AppState, Arc<StubLeadRepository>, Arc<RecordingNotifier>) {
    let repository = Arc::new(StubLeadRepository::new(outcome));
    let notifier = Arc::new(notifier);

    let service = Arc::new(LeadService::new(repository.clone(), notifier.clone()));

    (AppState::new(Some(service)), repository, notifier)
}

/// State with no record store configured.
pub fn unconfigured_state() -> AppState {
    AppState::new(None)
}

/// A payload that passes every validation check.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+1 555 0100",
        "company": "Acme",
        "company_size": "6-20",
        "challenge": "Manual reporting"
    })
}
