use crate::error::ClientError;
use config::{Config, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub credentials: CredentialSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            credentials: CredentialSettings::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base endpoint of the booking service, e.g. https://restful-booker.herokuapp.com
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Admin credentials exchanged for a token at `/auth`.
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialSettings {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: Secret<String>,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> Secret<String> {
    Secret::new("password123".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from an optional `booker.*` file and `APP_` environment variables.
    ///
    /// Nested keys use `__`, so the base endpoint is overridden with `APP_API__BASE_URL`.
    pub fn load() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("booker").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
