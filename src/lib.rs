//! bundle.social gateway
//!
//! A demo HTTP server in front of the bundle.social API:
//! - Team lookup and creation
//! - Social account connect flow and channel selection
//! - Media upload and scheduled multi-platform posts
//! - Webhook signature verification

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{BundlesocialClient, TeamIdStore};
use infrastructure::bundlesocial::{BundlesocialApiClient, HttpClient};
use infrastructure::webhook::WebhookVerifier;
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let http = HttpClient::from_config(&config.bundlesocial)?;
    let client: Arc<dyn BundlesocialClient> = Arc::new(BundlesocialApiClient::new(http));

    let team_ids = match &config.bundlesocial.team_id {
        Some(team_id) => {
            info!(team_id = %team_id, "Using configured team");
            TeamIdStore::with_team_id(team_id.clone())
        }
        None => TeamIdStore::new(),
    };

    Ok(AppState::new(
        client,
        Arc::new(team_ids),
        WebhookVerifier::new(config.bundlesocial.webhook_secret.clone()),
        config.demo.clone(),
    ))
}
