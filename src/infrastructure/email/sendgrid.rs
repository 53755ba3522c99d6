//! SendGrid notifier implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::message::LeadMessage;
use super::service::{Notifier, NotifierError, NotifierResult};
use crate::domain::entities::{Lead, LeadRecord};

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Serialize)]
struct MailSendPayload<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

/// Notifier backed by the SendGrid v3 mail send API.
pub struct SendGridNotifier {
    http: Client,
    api_key: String,
    from: String,
    to: String,
}

impl SendGridNotifier {
    /// Creates a SendGrid notifier sending from `from` to `to`.
    pub fn new(api_key: String, from: String, to: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            from,
            to,
        }
    }
}

#[async_trait]
impl Notifier for SendGridNotifier {
    async fn notify(&self, lead: &Lead, record: &LeadRecord) -> NotifierResult<()> {
        let message = LeadMessage::render(lead, record);

        // Plain text must come first; SendGrid orders content parts strictly.
        let payload = MailSendPayload {
            personalizations: [Personalization {
                to: [Address { email: &self.to }],
            }],
            from: Address { email: &self.from },
            subject: &message.subject,
            content: [
                Content {
                    content_type: "text/plain",
                    value: &message.text,
                },
                Content {
                    content_type: "text/html",
                    value: &message.html,
                },
            ],
        };

        let response = self
            .http
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifierError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to = %self.to, "lead notification sent via SendGrid");
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "sendgrid"
    }
}
