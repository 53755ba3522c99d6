//! Property map construction for lead records.
//!
//! Builds the typed property payload Notion expects for one lead. Property
//! names and types must match the target database schema exactly.

use crate::domain::entities::{Lead, NOT_PROVIDED};
use chrono::Utc;
use serde_json::{Value, json};

/// Select value stamped on every new record.
pub const STATUS_NEW: &str = "New";

/// Select value marking where the lead was acquired.
pub const SOURCE_WEBSITE: &str = "Website - Homepage";

/// Builds the full property map for one lead.
///
/// The `Email` property is lower-cased for the record store; everything else
/// keeps the submitted casing. A blank phone becomes a null `phone_number`,
/// while a blank challenge becomes the literal sentinel string — the two
/// optionals intentionally do not behave alike.
pub fn lead_properties(lead: &Lead) -> Value {
    let phone: Value = match lead.phone.as_deref() {
        Some(phone) => json!(phone),
        None => Value::Null,
    };

    json!({
        "Name": {
            "title": [{ "text": { "content": lead.name } }]
        },
        "Email": {
            "email": lead.email.to_lowercase()
        },
        "Phone": {
            "phone_number": phone
        },
        "Company": {
            "rich_text": [{ "text": { "content": lead.company } }]
        },
        "Company Size": {
            "select": { "name": lead.company_size.as_str() }
        },
        "Challenge": {
            "rich_text": [{ "text": { "content": lead.challenge.as_deref().unwrap_or(NOT_PROVIDED) } }]
        },
        "Status": {
            "select": { "name": STATUS_NEW }
        },
        "Source": {
            "select": { "name": SOURCE_WEBSITE }
        },
        "Submitted": {
            "date": { "start": submission_date() }
        }
    })
}

/// Current UTC date at calendar-day granularity, `YYYY-MM-DD`.
fn submission_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
