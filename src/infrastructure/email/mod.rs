//! Email notification layer.
//!
//! Provides a [`Notifier`] trait with three implementations:
//! - [`SendGridNotifier`] - SendGrid v3 mail send
//! - [`ResendNotifier`] - Resend emails API
//! - [`NullNotifier`] - No-op when no provider credential is configured
//!
//! Provider selection happens once at startup (see [`crate::server`]), by
//! credential presence: SendGrid first, then Resend, then the no-op.

mod message;
mod null_notifier;
mod resend;
mod sendgrid;
mod service;

pub use message::LeadMessage;
pub use null_notifier::NullNotifier;
pub use resend::ResendNotifier;
pub use sendgrid::SendGridNotifier;
pub use service::{Notifier, NotifierError, NotifierResult};

#[cfg(test)]
pub use service::MockNotifier;

/// Default sender when `SENDGRID_FROM_EMAIL` is not set.
pub const DEFAULT_FROM_ADDRESS: &str = "notifications@example.com";

/// Default recipient when `LEAD_NOTIFY_EMAIL` is not set.
pub const DEFAULT_NOTIFY_ADDRESS: &str = "sales@example.com";
