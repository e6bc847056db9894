//! Organization and team endpoints

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{CreateTeamRequest, Organization, Team};

/// GET /organization
///
/// Selects the organization's first team for the team-scoped routes.
pub async fn get_organization(
    State(state): State<AppState>,
) -> Result<Json<Organization>, ApiError> {
    let organization = state.client.organization_get_organization().await?;

    match organization.first_team_id() {
        Some(team_id) => {
            state.team_ids.set(team_id);
            info!(team_id = %team_id, "Selected first organization team");
        }
        None => debug!(
            organization_id = organization.id().unwrap_or_default(),
            "Organization has no teams"
        ),
    }

    Ok(Json(organization))
}

/// GET /create-team
pub async fn create_team(State(state): State<AppState>) -> Result<Json<Team>, ApiError> {
    let request = CreateTeamRequest::new(state.demo.team_name.clone());
    let team = state.client.team_create_team(request).await?;

    match team.id() {
        Some(team_id) => {
            state.team_ids.set(team_id);
            info!(team_id = %team_id, "Created and selected team");
        }
        None => warn!("Created team has no id, keeping current selection"),
    }

    Ok(Json(team))
}

/// GET /team
pub async fn get_team(State(state): State<AppState>) -> Result<Json<Team>, ApiError> {
    let team_id = state.selected_team_id()?;
    debug!(team_id = %team_id, "Fetching team");

    let team = state.client.team_get_team(&team_id).await?;

    Ok(Json(team))
}

#[cfg(test)]
mod tests {
    use crate::api::router::create_router;
    use crate::api::state::test_support::{get, state_with};
    use crate::api::state::NO_TEAM_SELECTED;
    use crate::api::types::INTERNAL_SERVER_ERROR;
    use crate::domain::social::MockBundlesocialClient;
    use crate::domain::{DomainError, Organization, Team, TeamIdStore};
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn organization(teams: Value) -> Organization {
        Organization::from(json!({ "id": "org-1", "name": "Acme", "teams": teams }))
    }

    fn team(id: &str) -> Team {
        Team::from(json!({ "id": id, "name": "Demo" }))
    }

    #[tokio::test]
    async fn test_organization_selects_first_team() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_organization_get_organization()
            .times(1)
            .returning(|| Ok(organization(json!([{ "id": "team-1" }, { "id": "team-2" }]))));

        let state = state_with(client, TeamIdStore::new());
        let team_ids = state.team_ids.clone();
        let app = create_router(state);

        let (status, body) = get(&app, "/organization").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["name"], "Acme");
        assert_eq!(team_ids.get(), Some("team-1".to_string()));
    }

    #[tokio::test]
    async fn test_organization_without_teams_keeps_selection() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_organization_get_organization()
            .returning(|| Ok(organization(json!([]))));

        let state = state_with(client, TeamIdStore::with_team_id("seeded"));
        let team_ids = state.team_ids.clone();
        let app = create_router(state);

        let (status, _) = get(&app, "/organization").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(team_ids.get(), Some("seeded".to_string()));
    }

    #[tokio::test]
    async fn test_organization_vendor_error() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_organization_get_organization()
            .returning(|| Err(DomainError::vendor(429, json!({ "message": "Too many requests" }))));

        let app = create_router(state_with(client, TeamIdStore::new()));
        let (status, body) = get(&app, "/organization").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({ "message": "Too many requests" })
        );
    }

    #[tokio::test]
    async fn test_create_team_uses_configured_name_and_selects_team() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_team_create_team()
            .withf(|request| request.name == "bundle.social demo team")
            .times(1)
            .returning(|_| Ok(team("team-new")));

        let state = state_with(client, TeamIdStore::with_team_id("old"));
        let team_ids = state.team_ids.clone();
        let app = create_router(state);

        let (status, body) = get(&app, "/create-team").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["id"], "team-new");
        assert_eq!(team_ids.get(), Some("team-new".to_string()));
    }

    #[tokio::test]
    async fn test_failed_create_team_keeps_selection() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_team_create_team()
            .returning(|_| Err(DomainError::transport("timeout")));

        let state = state_with(client, TeamIdStore::with_team_id("old"));
        let team_ids = state.team_ids.clone();
        let app = create_router(state);

        let (status, body) = get(&app, "/create-team").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, INTERNAL_SERVER_ERROR);
        assert_eq!(team_ids.get(), Some("old".to_string()));
    }

    #[tokio::test]
    async fn test_get_team_relays_irregular_payload_unchanged() {
        let payload = json!({
            "id": "team-1",
            "socialAccounts": [{ "type": "YOUTUBE", "channels": [{ "name": "no id" }] }],
            "teams": null,
            "avatarUrl": null
        });
        let relayed = payload.clone();

        let mut client = MockBundlesocialClient::new();
        client
            .expect_team_get_team()
            .returning(move |_| Ok(Team::from(relayed.clone())));

        let app = create_router(state_with(client, TeamIdStore::with_team_id("team-1")));
        let (status, body) = get(&app, "/team").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), payload);
    }

    #[tokio::test]
    async fn test_get_team_without_selection() {
        let app = create_router(state_with(MockBundlesocialClient::new(), TeamIdStore::new()));
        let (status, body) = get(&app, "/team").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, NO_TEAM_SELECTED);
    }

    #[tokio::test]
    async fn test_team_reuses_id_from_organization() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_organization_get_organization()
            .returning(|| Ok(organization(json!([{ "id": "team-42" }]))));
        client
            .expect_team_get_team()
            .withf(|team_id| team_id == "team-42")
            .times(1)
            .returning(|team_id| Ok(team(team_id)));

        let app = create_router(state_with(client, TeamIdStore::new()));

        let (status, _) = get(&app, "/organization").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(&app, "/team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["id"], "team-42");
    }

    #[tokio::test]
    async fn test_team_reuses_id_from_create_team() {
        let mut client = MockBundlesocialClient::new();
        client
            .expect_team_create_team()
            .returning(|_| Ok(team("team-created")));
        client
            .expect_team_get_team()
            .withf(|team_id| team_id == "team-created")
            .times(1)
            .returning(|team_id| Ok(team(team_id)));

        let state = state_with(client, TeamIdStore::new());
        let app = create_router(state);

        get(&app, "/create-team").await;
        let (status, _) = get(&app, "/team").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_store_is_shared_between_state_clones() {
        let state = state_with(MockBundlesocialClient::new(), TeamIdStore::new());
        let cloned = state.clone();

        state.team_ids.set("team-1");
        assert!(Arc::ptr_eq(&state.team_ids, &cloned.team_ids));
        assert_eq!(cloned.selected_team_id().unwrap(), "team-1");
    }
}
