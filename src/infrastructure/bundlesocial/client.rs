use std::future::Future;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

use super::http_client::HttpClient;
use crate::domain::{
    BundlesocialClient, ConnectRequest, CreatePostRequest, CreateTeamRequest, DomainError,
    MediaFile, Organization, Post, SetChannelRequest, Team, Upload,
};
use crate::infrastructure::observability::{record_vendor_request, VendorRequestMetricParams};

/// bundle.social API client backed by reqwest
#[derive(Debug, Clone)]
pub struct BundlesocialApiClient {
    http: HttpClient,
}

impl BundlesocialApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    async fn observe<T, F>(&self, operation: &'static str, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        let start = Instant::now();
        debug!(operation, "Calling bundle.social");

        let result = call.await;
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(_) => "success",
            Err(DomainError::Vendor { status, .. }) => {
                warn!(operation, status, "bundle.social returned an error");
                "vendor_error"
            }
            Err(e) => {
                warn!(operation, error = %e, "bundle.social request failed");
                "error"
            }
        };

        record_vendor_request(VendorRequestMetricParams {
            operation,
            outcome,
            duration,
        });

        result
    }
}

#[async_trait]
impl BundlesocialClient for BundlesocialApiClient {
    async fn app_get_health(&self) -> Result<Value, DomainError> {
        self.observe("app_get_health", self.http.get_json("/app/health"))
            .await
    }

    async fn organization_get_organization(&self) -> Result<Organization, DomainError> {
        self.observe(
            "organization_get_organization",
            self.http.get_json("/organization/"),
        )
        .await
    }

    async fn team_create_team(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        self.observe("team_create_team", self.http.post_json("/team/", &request))
            .await
    }

    async fn team_get_team(&self, team_id: &str) -> Result<Team, DomainError> {
        let path = format!("/team/{}", team_id);
        self.observe("team_get_team", self.http.get_json(&path)).await
    }

    async fn social_account_connect(&self, request: ConnectRequest) -> Result<Value, DomainError> {
        self.observe(
            "social_account_connect",
            self.http.post_json("/social-account/connect", &request),
        )
        .await
    }

    async fn social_account_set_channel(
        &self,
        request: SetChannelRequest,
    ) -> Result<Value, DomainError> {
        self.observe(
            "social_account_set_channel",
            self.http.post_json("/social-account/set-channel", &request),
        )
        .await
    }

    async fn upload_create(&self, team_id: &str, file: MediaFile) -> Result<Upload, DomainError> {
        let size = file.len();
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| DomainError::validation(format!("Invalid MIME type: {}", e)))?;

        let form = Form::new().text("teamId", team_id.to_string()).part("file", part);

        debug!(team_id, size, "Uploading media");
        self.observe("upload_create", self.http.post_multipart("/upload/", form))
            .await
    }

    async fn post_create(&self, request: CreatePostRequest) -> Result<Post, DomainError> {
        self.observe("post_create", self.http.post_json("/post/", &request))
            .await
    }
}
