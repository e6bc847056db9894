//! Error responses of the gateway routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::DomainError;

/// Body sent for every error that is not a vendor API error
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Route error.
///
/// Vendor API errors relay the vendor payload; any other failure collapses
/// to a fixed 500 text. Client mistakes get a 400 with a short text, and
/// rejected webhooks a bare 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bundle.social API error (HTTP {status})")]
    Vendor { status: u16, body: Value },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Webhook rejected")]
    WebhookRejected,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Vendor { .. } | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) | Self::WebhookRejected => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            Self::Vendor { body, .. } => (status, Json(body)).into_response(),
            Self::BadRequest(message) => (status, message).into_response(),
            Self::WebhookRejected => status.into_response(),
            Self::Internal => (status, INTERNAL_SERVER_ERROR).into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Vendor { status, body } => {
                warn!(status, body = %body, "bundle.social API error");
                Self::Vendor { status, body }
            }
            other => {
                error!(error = %other, "Unknown error");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_vendor_error_relays_payload_as_500() {
        let err: ApiError =
            DomainError::vendor(403, json!({ "message": "Forbidden" })).into();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({ "message": "Forbidden" }));
    }

    #[tokio::test]
    async fn test_other_errors_collapse_to_fixed_text() {
        for err in [
            DomainError::transport("timeout"),
            DomainError::io("missing file"),
            DomainError::internal("boom"),
        ] {
            let response = ApiError::from(err).into_response();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_text(response).await, INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_bad_request_is_plain_text() {
        let response = ApiError::bad_request("No channel found").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "No channel found");
    }

    #[tokio::test]
    async fn test_webhook_rejection_has_empty_body() {
        let response = ApiError::WebhookRejected.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.is_empty());
    }
}
