//! Business logic services for the application layer.

pub mod lead_service;

pub use lead_service::LeadService;
