//! Check command - one health call against bundle.social

use anyhow::Context;

use crate::config::AppConfig;
use crate::domain::{BundlesocialClient, DomainError};
use crate::infrastructure::bundlesocial::{BundlesocialApiClient, HttpClient};
use crate::infrastructure::logging;

/// Print the vendor health payload, failing when the call does not succeed
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let client = BundlesocialApiClient::new(HttpClient::from_config(&config.bundlesocial)?);

    match client.app_get_health().await {
        Ok(health) => {
            let output = serde_json::to_string_pretty(&health)
                .context("Failed to format health payload")?;
            println!("{}", output);
            Ok(())
        }
        Err(DomainError::Vendor { status, body }) => {
            anyhow::bail!("bundle.social answered HTTP {}: {}", status, body)
        }
        Err(e) => Err(e).context("bundle.social health check failed"),
    }
}
