use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::social::SocialAccountType;
use crate::infrastructure::observability::ObservabilityConfig;

/// Environment variable holding the bundle.social API key
pub const API_KEY_ENV: &str = "BUNDLESOCIAL_API_KEY";

/// Environment variable holding the shared webhook signing secret
pub const WEBHOOK_SECRET_ENV: &str = "BUNDLESOCIAL_WEBHOOK_SECRET";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub bundlesocial: BundlesocialConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Connection settings for the bundle.social API
#[derive(Clone, Deserialize)]
pub struct BundlesocialConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub webhook_secret: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Team selected at startup, before `/organization` or `/create-team` pick one
    #[serde(default)]
    pub team_id: Option<String>,
}

/// Fixed values used by the demo routes
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_team_name")]
    pub team_name: String,
    #[serde(default = "default_platform")]
    pub platform: SocialAccountType,
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
    #[serde(default = "default_video_path")]
    pub video_path: PathBuf,
}

fn default_base_url() -> String {
    "https://api.bundle.social".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_team_name() -> String {
    "bundle.social demo team".to_string()
}

fn default_platform() -> SocialAccountType {
    SocialAccountType::Youtube
}

fn default_redirect_url() -> String {
    "https://bundle.social".to_string()
}

fn default_video_path() -> PathBuf {
    PathBuf::from("./assets/video.mp4")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for BundlesocialConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            webhook_secret: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            team_id: None,
        }
    }
}

impl std::fmt::Debug for BundlesocialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundlesocialConfig")
            .field("api_key", &"[REDACTED]")
            .field("webhook_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("team_id", &self.team_id)
            .finish()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            team_name: default_team_name(),
            platform: default_platform(),
            redirect_url: default_redirect_url(),
            video_path: default_video_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files, `APP__*` variables and the
    /// `BUNDLESOCIAL_*` secrets in the process environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::load`], reading the secrets through `lookup`
    pub fn load_with<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("bundlesocial.api_key", lookup(API_KEY_ENV))?
            .set_override_option("bundlesocial.webhook_secret", lookup(WEBHOOK_SECRET_ENV))?
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.bundlesocial.api_key.trim().is_empty() {
            return Err(config::ConfigError::Message(format!(
                "{} is required",
                API_KEY_ENV
            )));
        }

        if self.bundlesocial.webhook_secret.trim().is_empty() {
            return Err(config::ConfigError::Message(format!(
                "{} is required",
                WEBHOOK_SECRET_ENV
            )));
        }

        Ok(())
    }
}
