//! Application state shared by the route handlers

use std::sync::Arc;

use crate::api::types::ApiError;
use crate::config::DemoConfig;
use crate::domain::{BundlesocialClient, TeamIdStore};
use crate::infrastructure::webhook::WebhookVerifier;

/// Returned by team-scoped routes before any team was selected
pub const NO_TEAM_SELECTED: &str = "No team selected";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn BundlesocialClient>,
    pub team_ids: Arc<TeamIdStore>,
    pub webhook_verifier: Arc<WebhookVerifier>,
    pub demo: Arc<DemoConfig>,
}

impl AppState {
    pub fn new(
        client: Arc<dyn BundlesocialClient>,
        team_ids: Arc<TeamIdStore>,
        webhook_verifier: WebhookVerifier,
        demo: DemoConfig,
    ) -> Self {
        Self {
            client,
            team_ids,
            webhook_verifier: Arc::new(webhook_verifier),
            demo: Arc::new(demo),
        }
    }

    /// Team id the team-scoped routes act on
    pub fn selected_team_id(&self) -> Result<String, ApiError> {
        self.team_ids
            .get()
            .ok_or_else(|| ApiError::bad_request(NO_TEAM_SELECTED))
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::domain::social::MockBundlesocialClient;

    pub const TEST_WEBHOOK_SECRET: &str = "test-webhook-secret";

    /// Send a request through the router, returning status and body text
    pub async fn call(router: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
        call(router, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub fn state_with(client: MockBundlesocialClient, team_ids: TeamIdStore) -> AppState {
        AppState::new(
            Arc::new(client),
            Arc::new(team_ids),
            WebhookVerifier::new(TEST_WEBHOOK_SECRET),
            DemoConfig::default(),
        )
    }
}
