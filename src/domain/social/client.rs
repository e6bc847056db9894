//! Client contract for the bundle.social API

use async_trait::async_trait;
use serde_json::Value;

use super::entity::{Organization, Post, Team, Upload};
use super::request::{
    ConnectRequest, CreatePostRequest, CreateTeamRequest, MediaFile, SetChannelRequest,
};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Operations the gateway performs against bundle.social.
///
/// A non-success answer from the API surfaces as [`DomainError::Vendor`];
/// every other failure is some other variant.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BundlesocialClient: Send + Sync {
    /// Vendor health payload
    async fn app_get_health(&self) -> Result<Value, DomainError>;

    /// Organization the API key belongs to, including its teams
    async fn organization_get_organization(&self) -> Result<Organization, DomainError>;

    async fn team_create_team(&self, request: CreateTeamRequest) -> Result<Team, DomainError>;

    async fn team_get_team(&self, team_id: &str) -> Result<Team, DomainError>;

    /// Starts the connect flow; the payload holds the URL to send the user to
    async fn social_account_connect(&self, request: ConnectRequest) -> Result<Value, DomainError>;

    async fn social_account_set_channel(
        &self,
        request: SetChannelRequest,
    ) -> Result<Value, DomainError>;

    async fn upload_create(&self, team_id: &str, file: MediaFile) -> Result<Upload, DomainError>;

    async fn post_create(&self, request: CreatePostRequest) -> Result<Post, DomainError>;
}
