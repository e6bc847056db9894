use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::{health, home, posts, social_accounts, teams, webhook};

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Organization and teams
        .route("/organization", get(teams::get_organization))
        .route("/create-team", get(teams::create_team))
        .route("/team", get(teams::get_team))
        // Social accounts
        .route("/social-account-connect", get(social_accounts::connect))
        .route(
            "/social-account-select-channel",
            get(social_accounts::select_channel),
        )
        // Publishing
        .route("/post", get(posts::create_post))
        .route("/webhook", post(webhook::receive_webhook))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
