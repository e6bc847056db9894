use serde_json::Value;
use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The bundle.social API answered with a non-success status
    #[error("Vendor API error: HTTP {status}")]
    Vendor { status: u16, body: Value },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid signature: {message}")]
    InvalidSignature { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn vendor(status: u16, body: Value) -> Self {
        Self::Vendor { status, body }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error came back from the vendor API itself
    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::Vendor { .. })
    }
}
