//! Notion integration for lead record storage.
//!
//! Implements [`crate::domain::repositories::LeadRepository`] against the
//! Notion pages API. One record is created per submission; the database
//! itself is owned and read elsewhere.

pub mod notion_lead_repository;
pub mod properties;

pub use notion_lead_repository::{NotionErrorCode, NotionLeadRepository, map_notion_error};
pub use properties::{SOURCE_WEBSITE, STATUS_NEW, lead_properties};
