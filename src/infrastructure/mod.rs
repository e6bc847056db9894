//! Infrastructure layer - External service implementations

pub mod bundlesocial;
pub mod logging;
pub mod media;
pub mod observability;
pub mod webhook;
