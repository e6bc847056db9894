//! Post publishing endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{CreatePostRequest, DomainError, Post};
use crate::infrastructure::media::load_media_file;

/// GET /post
///
/// Uploads the local demo video and schedules it on every demo platform.
pub async fn create_post(State(state): State<AppState>) -> Result<Json<Post>, ApiError> {
    let team_id = state.selected_team_id()?;

    let video = load_media_file(&state.demo.video_path).await?;
    let upload = state.client.upload_create(&team_id, video).await?;
    let upload_id = upload
        .id()
        .ok_or_else(|| DomainError::validation("Upload response has no id"))?;
    info!(team_id = %team_id, upload_id = %upload_id, "Uploaded demo video");

    let request = CreatePostRequest::demo(team_id, upload_id, Utc::now());
    let post = state.client.post_create(request).await?;
    info!(post_id = post.id().unwrap_or_default(), "Scheduled demo post");

    Ok(Json(post))
}
