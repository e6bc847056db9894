//! Request payloads sent to the bundle.social API

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Serialize;

use super::entity::SocialAccountType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl CreateTeamRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_url: None,
        }
    }
}

/// Starts the OAuth connect flow for one platform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    #[serde(rename = "type")]
    pub account_type: SocialAccountType,
    pub team_id: String,
    pub redirect_url: String,
}

/// Picks which channel of a linked account posts go to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetChannelRequest {
    #[serde(rename = "type")]
    pub account_type: SocialAccountType,
    pub team_id: String,
    pub channel_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub team_id: String,
    pub title: String,
    pub status: PostStatus,
    /// RFC 3339 timestamp, millisecond precision
    pub post_date: String,
    pub social_account_types: Vec<SocialAccountType>,
    pub data: BTreeMap<SocialAccountType, PlatformPostData>,
}

/// Per-platform post content
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPostData {
    /// Platform specific post kind, e.g. `REEL` or `SHORT`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    /// Target subreddit (Reddit only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sr: Option<String>,
    pub text: String,
    pub upload_ids: Vec<String>,
}

/// File to upload, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl MediaFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
