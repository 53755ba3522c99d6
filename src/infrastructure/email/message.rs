//! Notification message rendering.

use crate::domain::entities::{Lead, LeadRecord};
use crate::infrastructure::notion::SOURCE_WEBSITE;

/// A rendered notification: subject plus plain-text and HTML bodies.
///
/// Both bodies carry the same fields so the message is complete in clients
/// that strip HTML.
#[derive(Debug, Clone)]
pub struct LeadMessage {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl LeadMessage {
    /// Renders the notification for one lead and its created record.
    pub fn render(lead: &Lead, record: &LeadRecord) -> Self {
        let subject = format!("New lead: {} ({})", lead.name, lead.company);

        let text = format!(
            "New lead received from the website.\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Company: {company}\n\
             Size: {size} employees\n\
             Challenge: {challenge}\n\
             \n\
             View the record: {url}\n",
            name = lead.name,
            email = lead.email,
            phone = lead.phone_or_default(),
            company = lead.company,
            size = lead.company_size.as_str(),
            challenge = lead.challenge_or_default(),
            url = record.url,
        );

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>New lead received</h2>
  <div style="background: #f4f4f4; padding: 20px; border-radius: 8px;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Company:</strong> {company}</p>
    <p><strong>Size:</strong> {size} employees</p>
    <p><strong>Challenge:</strong> {challenge}</p>
  </div>
  <p><a href="{url}">View the record</a></p>
  <hr style="margin: 30px 0; border: none; border-top: 1px solid #e0e0e0;">
  <p style="color: #888; font-size: 14px;">Lead captured from: <strong>{source}</strong></p>
</div>"#,
            name = lead.name,
            email = lead.email,
            phone = lead.phone_or_default(),
            company = lead.company,
            size = lead.company_size.as_str(),
            challenge = lead.challenge_or_default(),
            url = record.url,
            source = SOURCE_WEBSITE,
        );

        Self {
            subject,
            text,
            html,
        }
    }
}
