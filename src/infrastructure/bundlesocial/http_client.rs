use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BundlesocialConfig;
use crate::domain::DomainError;

/// Header carrying the bundle.social API key
pub const API_KEY_HEADER: &str = "x-api-key";

const API_PREFIX: &str = "/api/v1";

/// Authenticated HTTP transport for the bundle.social REST API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bundlesocial-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &BundlesocialConfig) -> Result<Self, DomainError> {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Absolute URL of an API path such as `/team/abc`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let request = self.client.get(self.url(path));
        self.send(request).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, DomainError> {
        let request = self.client.post(self.url(path)).multipart(form);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, DomainError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        parse_response(response).await
    }
}

/// Success bodies are decoded as `T`; anything else becomes a vendor error
/// carrying the error payload (JSON when possible, raw text otherwise).
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

        return Err(DomainError::vendor(status.as_u16(), body));
    }

    response
        .json()
        .await
        .map_err(|e| DomainError::transport(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let client =
            HttpClient::new("key", "http://localhost:9000/", Duration::from_secs(5)).unwrap();

        assert_eq!(client.url("/team/abc"), "http://localhost:9000/api/v1/team/abc");
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = BundlesocialConfig::default();
        let client = HttpClient::from_config(&config).unwrap();

        assert_eq!(
            client.url("/app/health"),
            "https://api.bundle.social/api/v1/app/health"
        );
    }
}
