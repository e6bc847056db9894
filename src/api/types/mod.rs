//! Shared API types

pub mod error;

pub use error::{ApiError, INTERNAL_SERVER_ERROR};
