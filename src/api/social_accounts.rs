//! Social account linking endpoints

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{ConnectRequest, SetChannelRequest};

pub const NO_SOCIAL_ACCOUNT_FOUND: &str = "No social account found";
pub const NO_CHANNEL_FOUND: &str = "No channel found";

/// GET /social-account-connect
///
/// Starts the connect flow for the demo platform on the selected team.
pub async fn connect(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let team_id = state.selected_team_id()?;
    let platform = state.demo.platform;
    debug!(team_id = %team_id, platform = %platform, "Starting social account connect");

    let request = ConnectRequest {
        account_type: platform,
        team_id,
        redirect_url: state.demo.redirect_url.clone(),
    };

    let response = state.client.social_account_connect(request).await?;

    Ok(Json(response))
}

/// GET /social-account-select-channel
///
/// Points the demo platform's account at its first channel.
pub async fn select_channel(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let team_id = state.selected_team_id()?;
    let platform = state.demo.platform;

    let team = state.client.team_get_team(&team_id).await?;

    let account = team
        .social_account(platform)
        .ok_or_else(|| ApiError::bad_request(NO_SOCIAL_ACCOUNT_FOUND))?;

    let channel_id = account
        .channel_ids()
        .next()
        .ok_or_else(|| ApiError::bad_request(NO_CHANNEL_FOUND))?
        .to_string();

    info!(team_id = %team_id, platform = %platform, channel_id = %channel_id, "Selecting channel");

    let request = SetChannelRequest {
        account_type: platform,
        team_id,
        channel_id,
    };

    let response = state.client.social_account_set_channel(request).await?;

    Ok(Json(response))
}
