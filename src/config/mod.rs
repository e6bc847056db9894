//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, BundlesocialConfig, DemoConfig, LogFormat, LoggingConfig, ServerConfig,
    API_KEY_ENV, WEBHOOK_SECRET_ENV,
};
