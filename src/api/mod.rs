//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod home;
pub mod middleware;
pub mod posts;
pub mod router;
pub mod social_accounts;
pub mod state;
pub mod teams;
pub mod types;
pub mod webhook;

pub use router::create_router;
pub use state::AppState;
