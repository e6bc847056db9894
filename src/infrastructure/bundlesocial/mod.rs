//! bundle.social API client
//!
//! `HttpClient` owns transport concerns (base URL, API key header, timeouts,
//! status handling); `BundlesocialApiClient` maps each vendor operation onto it.

mod client;
mod http_client;

pub use client::BundlesocialApiClient;
pub use http_client::{HttpClient, API_KEY_HEADER};
