//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for external data operations; concrete
//! implementations live in `crate::infrastructure`. Mock implementations
//! are auto-generated via `mockall` for unit tests.

pub mod lead_repository;

pub use lead_repository::LeadRepository;

#[cfg(test)]
pub use lead_repository::MockLeadRepository;
