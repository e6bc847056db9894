//! Webhook domain module for events pushed by bundle.social

mod event;

pub use event::WebhookEvent;
