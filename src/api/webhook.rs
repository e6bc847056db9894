//! Inbound bundle.social webhooks

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::webhook::SIGNATURE_HEADER;

/// POST /webhook
///
/// Accepts any correctly signed event; nothing is done with it beyond logging.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match state.webhook_verifier.construct_event(&body, signature) {
        Ok(event) => {
            info!(event_type = %event.event_type(), "Received webhook event");
            Ok(StatusCode::OK)
        }
        Err(e) => {
            warn!(error = %e, "Webhook signature verification failed");
            Err(ApiError::WebhookRejected)
        }
    }
}
