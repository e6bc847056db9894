//! Webhook signature verification

mod signature;

pub use signature::{WebhookVerifier, SIGNATURE_HEADER};
