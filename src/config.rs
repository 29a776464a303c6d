//! Client configuration
//!
//! Passed explicitly to `HttpClient::new` and the auth helpers. Loadable
//! from YAML; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default cross-origin proxy; `{uri}` is replaced with the encoded target
pub const DEFAULT_PROXY_TEMPLATE: &str = "https://databox.me/proxy?uri={uri}";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default endpoint probed for a WebID when the resource itself has none
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://databox.me/";

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid origin '{origin}': {message}")]
    InvalidOrigin { origin: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Proxy used for reads outside `origin`
    pub proxy_template: Option<String>,
    /// Origin of the calling application; no proxying when unset
    pub origin: Option<String>,
    /// Fallback endpoint for WebID discovery
    pub auth_endpoint: String,
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            proxy_template: Some(DEFAULT_PROXY_TEMPLATE.to_string()),
            origin: None,
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            user_agent: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// `<config_dir>/solid-ldp/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("solid-ldp").join("config.yaml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_proxy_template(mut self, template: Option<String>) -> Self {
        self.proxy_template = template;
        self
    }

    pub fn with_auth_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.auth_endpoint = endpoint.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(origin) = &self.origin {
            url::Url::parse(origin).map_err(|e| ConfigError::InvalidOrigin {
                origin: origin.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}
