//! HTTP server initialization and runtime setup.
//!
//! Handles record-store and notifier construction, state assembly, and the
//! Axum server lifecycle.

use crate::application::services::LeadService;
use crate::config::Config;
use crate::infrastructure::email::{
    DEFAULT_FROM_ADDRESS, Notifier, NullNotifier, ResendNotifier, SendGridNotifier,
};
use crate::infrastructure::notion::NotionLeadRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The Notion lead repository (when credentials are present)
/// - The notification provider, by credential presence
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listener fails to bind or the server errors at
/// runtime. Missing record-store credentials are NOT an error here: the
/// server starts and answers 500 per submission until they are provided.
pub async fn run(config: Config) -> Result<()> {
    let lead_service = build_lead_service(&config)?;

    let state = AppState::new(lead_service);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Assembles the lead service from configuration.
///
/// Returns `None` when the record store is unconfigured; the notifier is
/// still selected so the condition shows up in logs with full context.
fn build_lead_service(config: &Config) -> Result<Option<Arc<LeadService>>> {
    let notifier = select_notifier(config);

    let (Some(api_key), Some(database_id)) =
        (&config.notion_api_key, &config.notion_database_id)
    else {
        tracing::error!(
            "NOTION_API_KEY / NOTION_DATABASE_ID missing; submissions will answer 500"
        );
        return Ok(None);
    };

    let repository = NotionLeadRepository::new(api_key, database_id.clone())
        .map_err(|e| anyhow::anyhow!("failed to construct record-store client: {e:?}"))?;
    tracing::info!("Record store client ready");

    Ok(Some(Arc::new(LeadService::new(
        Arc::new(repository),
        notifier,
    ))))
}

/// Selects the notification provider by credential presence.
///
/// SendGrid is checked first, Resend second; with neither, a no-op notifier
/// keeps submissions working and logs a warning per skipped send.
fn select_notifier(config: &Config) -> Arc<dyn Notifier> {
    if let Some(key) = &config.sendgrid_api_key {
        tracing::info!("Notifications enabled (SendGrid)");
        Arc::new(SendGridNotifier::new(
            key.clone(),
            config.sendgrid_from_email.clone(),
            config.notify_email.clone(),
        ))
    } else if let Some(key) = &config.resend_api_key {
        // Resend sends are fixed to the default from-address;
        // SENDGRID_FROM_EMAIL only applies to SendGrid.
        tracing::info!("Notifications enabled (Resend)");
        Arc::new(ResendNotifier::new(
            key.clone(),
            DEFAULT_FROM_ADDRESS.to_string(),
            config.notify_email.clone(),
        ))
    } else {
        tracing::warn!("Notifications disabled (no SENDGRID_API_KEY or RESEND_API_KEY)");
        Arc::new(NullNotifier::new())
    }
}
