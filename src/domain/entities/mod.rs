//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures for the lead-capture
//! flow. Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Lead`] - A validated contact-form submission
//! - [`CompanySize`] - The closed set of headcount brackets
//! - [`LeadRecord`] - The identity the record store assigns on creation
//!
//! A lead has no lifecycle beyond a single request: the client builds it,
//! the server validates it, the record store gives it durable identity, and
//! this system forgets it.

pub mod lead;

pub use lead::{CompanySize, Lead, LeadRecord, NOT_PROVIDED};
