//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod submit_lead;

pub use health::health_handler;
pub use submit_lead::{method_not_allowed_handler, preflight_handler, submit_lead_handler};
