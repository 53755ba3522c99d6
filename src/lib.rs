//! # Lead Capture
//!
//! A lead-capture service bridging a contact form, a Notion database, and
//! transactional email, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Lead entities and the record-store trait
//! - **Application Layer** ([`application`]) - Submission orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Notion and email integrations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Client** ([`client`]) - Form-side HTTP client used by the `submit` binary
//!
//! ## Flow
//!
//! One submission is one linear request: configuration check → field
//! validation → record creation → best-effort email notification → JSON
//! response. No retries, no queueing, no state owned by this system.
//!
//! ## Quick Start
//!
//! ```bash
//! # Record store (required for submissions to succeed)
//! export NOTION_API_KEY="secret_..."
//! export NOTION_DATABASE_ID="..."
//!
//! # Notification provider (optional; SendGrid checked first)
//! export SENDGRID_API_KEY="SG...."
//!
//! # Start the service
//! cargo run
//!
//! # Submit a lead interactively
//! cargo run --bin submit
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::submit_lead::{SubmitLeadRequest, SubmitLeadResponse};
    pub use crate::application::services::LeadService;
    pub use crate::client::{LeadFormClient, SubmitError};
    pub use crate::domain::entities::{CompanySize, Lead, LeadRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
