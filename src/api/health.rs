//! Health endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use super::state::AppState;
use super::types::ApiError;

/// GET /health - relays the bundle.social health payload
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let health = state.client.app_get_health().await?;

    Ok(Json(health))
}

/// GET /live - process liveness, no vendor call
pub async fn live_check() -> StatusCode {
    StatusCode::OK
}
