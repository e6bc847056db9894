use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::{DomainError, WebhookEvent};

type HmacSha256 = Hmac<Sha256>;

/// Header bundle.social puts the payload signature in
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Verifies webhook payloads signed with the shared secret.
///
/// The signature is the hex-encoded HMAC-SHA256 of the raw request body.
/// A `sha256=` prefix is tolerated.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verify the signature and decode the event
    pub fn construct_event(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<WebhookEvent, DomainError> {
        self.verify(payload, signature)?;

        serde_json::from_slice(payload)
            .map_err(|e| DomainError::validation(format!("Invalid webhook payload: {}", e)))
    }

    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<(), DomainError> {
        let signature = signature.trim();
        let signature = signature.strip_prefix("sha256=").unwrap_or(signature);

        if signature.is_empty() {
            return Err(DomainError::invalid_signature("Missing signature"));
        }

        let expected = hex::decode(signature)
            .map_err(|_| DomainError::invalid_signature("Signature is not valid hex"))?;

        let mut mac = self.mac()?;
        mac.update(payload);

        mac.verify_slice(&expected)
            .map_err(|_| DomainError::invalid_signature("Signature mismatch"))
    }

    /// Hex signature for `payload`, as the sender computes it
    pub fn sign(&self, payload: &[u8]) -> Result<String, DomainError> {
        let mut mac = self.mac()?;
        mac.update(payload);

        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    fn mac(&self) -> Result<HmacSha256, DomainError> {
        HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| DomainError::internal(format!("Invalid HMAC key: {}", e)))
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
