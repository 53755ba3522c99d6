//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Record Store (required for submissions to succeed)
//!
//! ```bash
//! export NOTION_API_KEY="secret_..."
//! export NOTION_DATABASE_ID="..."
//! ```
//!
//! Missing record-store credentials do NOT stop the server: each submission
//! answers 500 until both are present, and startup logs the condition.
//!
//! ## Notification Provider (optional, selected by presence)
//!
//! ```bash
//! export SENDGRID_API_KEY="SG...."      # checked first
//! export SENDGRID_FROM_EMAIL="noreply@example.com"
//! export RESEND_API_KEY="re_..."        # fallback provider
//! export LEAD_NOTIFY_EMAIL="sales@example.com"
//! ```
//!
//! When neither provider key is set, notifications are skipped with a
//! logged warning; submissions are unaffected.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::infrastructure::email::{DEFAULT_FROM_ADDRESS, DEFAULT_NOTIFY_ADDRESS};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Record store ────────────────────────────────────────────────────────
    pub notion_api_key: Option<String>,
    pub notion_database_id: Option<String>,

    // ── Notification providers ──────────────────────────────────────────────
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_from_email: String,
    pub resend_api_key: Option<String>,
    /// Recipient of lead notifications.
    pub notify_email: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let notion_api_key = non_empty_var("NOTION_API_KEY");
        let notion_database_id = non_empty_var("NOTION_DATABASE_ID");

        let sendgrid_api_key = non_empty_var("SENDGRID_API_KEY");
        let sendgrid_from_email = env::var("SENDGRID_FROM_EMAIL")
            .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        let resend_api_key = non_empty_var("RESEND_API_KEY");
        let notify_email = env::var("LEAD_NOTIFY_EMAIL")
            .unwrap_or_else(|_| DEFAULT_NOTIFY_ADDRESS.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            notion_api_key,
            notion_database_id,
            sendgrid_api_key,
            sendgrid_from_email,
            resend_api_key,
            notify_email,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `notify_email` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.notify_email.is_empty() {
            anyhow::bail!("LEAD_NOTIFY_EMAIL must not be empty");
        }

        Ok(())
    }

    /// Returns whether both record-store credentials are present.
    pub fn is_record_store_configured(&self) -> bool {
        self.notion_api_key.is_some() && self.notion_database_id.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Record store: {}",
            if self.is_record_store_configured() {
                "configured"
            } else {
                "NOT CONFIGURED (submissions will fail)"
            }
        );
        tracing::info!("  SendGrid: {}", mask_presence(&self.sendgrid_api_key));
        tracing::info!("  Resend: {}", mask_presence(&self.resend_api_key));
        tracing::info!("  Notify address: {}", self.notify_email);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads an env var, treating empty values as absent.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Masks a credential down to its presence.
fn mask_presence(value: &Option<String>) -> &'static str {
    if value.is_some() { "set" } else { "not set" }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            notion_api_key: Some("secret".to_string()),
            notion_database_id: Some("db".to_string()),
            sendgrid_api_key: None,
            sendgrid_from_email: DEFAULT_FROM_ADDRESS.to_string(),
            resend_api_key: None,
            notify_email: DEFAULT_NOTIFY_ADDRESS.to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.notify_email = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_record_store_requires_both_credentials() {
        let mut config = base_config();
        assert!(config.is_record_store_configured());

        config.notion_database_id = None;
        assert!(!config.is_record_store_configured());

        config.notion_database_id = Some("db".to_string());
        config.notion_api_key = None;
        assert!(!config.is_record_store_configured());
    }

    #[test]
    #[serial]
    fn test_empty_credentials_count_as_absent() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("NOTION_API_KEY", "");
            env::set_var("NOTION_DATABASE_ID", "db-id");
        }

        let config = Config::from_env().unwrap();
        assert!(config.notion_api_key.is_none());
        assert_eq!(config.notion_database_id.as_deref(), Some("db-id"));
        assert!(!config.is_record_store_configured());

        // Cleanup
        unsafe {
            env::remove_var("NOTION_API_KEY");
            env::remove_var("NOTION_DATABASE_ID");
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("SENDGRID_FROM_EMAIL");
            env::remove_var("LEAD_NOTIFY_EMAIL");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.sendgrid_from_email, DEFAULT_FROM_ADDRESS);
        assert_eq!(config.notify_email, DEFAULT_NOTIFY_ADDRESS);
    }
}
