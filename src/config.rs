//! Client configuration loader - environment (`.env`) or TOML.
//!
//! Keeps the access token and transport settings out of code. Recognised
//! keys, in TOML and as environment variables:
//!
//!   token        / WAQI_TOKEN          (required)
//!   base_url     / WAQI_BASE_URL       (default https://api.waqi.info/api)
//!   timeout_secs / WAQI_TIMEOUT_SECS   (default 30)
//!   user_agent   / WAQI_USER_AGENT     (default waqi_client/<version>)

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::ingest::waqi::API_BASE_URL;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WAQI access token is not set (WAQI_TOKEN)")]
    MissingToken,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for one `AirQualityClient`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// WAQI access token, obtainable at https://aqicn.org/data-platform/token
    pub token: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("waqi_client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Default settings around the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads settings from the process environment, after loading `.env`
    /// from the working directory if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("WAQI_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let mut config = Self::new(token);

        if let Some(base_url) = lookup("WAQI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("WAQI_TIMEOUT_SECS") {
            config.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "WAQI_TIMEOUT_SECS".to_string(),
                value: raw.clone(),
            })?;
        }
        if let Some(user_agent) = lookup("WAQI_USER_AGENT") {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        if config.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(config)
    }
}

/// Loads a `ClientConfig` from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ClientConfig::from_toml_str(&contents)
}
