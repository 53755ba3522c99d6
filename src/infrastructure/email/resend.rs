//! Resend notifier implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::message::LeadMessage;
use super::service::{Notifier, NotifierError, NotifierResult};
use crate::domain::entities::{Lead, LeadRecord};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct ResendPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

/// Notifier backed by the Resend emails API.
pub struct ResendNotifier {
    http: Client,
    api_key: String,
    from: String,
    to: String,
}

impl ResendNotifier {
    /// Creates a Resend notifier sending from `from` to `to`.
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
impl Notifier for ResendNotifier {
    async fn notify(&self, lead: &Lead, record: &LeadRecord) -> NotifierResult<()> {
        let message = LeadMessage::render(lead, record);

        let payload = ResendPayload {
            from: &self.from,
            to: [&self.to],
            subject: &message.subject,
            html: &message.html,
            text: Some(&message.text),
        };

        let response = self
            .http
            .post(RESEND_API_URL)
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

        tracing::info!(to = %self.to, "lead notification sent via Resend");
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = ResendPayload {
            from: "notifications@example.com",
            to: ["sales@example.com"],
            subject: "New lead: Jane (Acme)",
            html: "<p>html body</p>",
            text: Some("text body"),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["from"], "notifications@example.com");
        assert_eq!(json["to"][0], "sales@example.com");
        assert_eq!(json["text"], "text body");
    }

    #[test]
    fn test_absent_text_is_omitted() {
        let payload = ResendPayload {
            from: "notifications@example.com",
            to: ["sales@example.com"],
            subject: "s",
            html: "<p>h</p>",
            text: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_provider_label() {
        let notifier = ResendNotifier::new(
            "key".to_string(),
            "notifications@example.com".to_string(),
            "sales@example.com".to_string(),
        );
        assert_eq!(notifier.provider(), "resend");
    }
}
