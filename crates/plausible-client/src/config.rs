//! Client configuration

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{PlausibleError, PlausibleResult};

/// Root of the public Plausible API
pub const DEFAULT_BASE_URL: &str = "https://plausible.io/api/v1/";

/// User agent sent with every request except event recording, which
/// forwards the visitor's own user agent
pub const DEFAULT_USER_AGENT: &str = "plausible-rs";

const TOKEN_ENV: &str = "PLAUSIBLE_TOKEN";
const BASE_URL_ENV: &str = "PLAUSIBLE_BASE_URL";

/// Configuration for a [`crate::Client`]
#[derive(Clone)]
pub struct ClientConfig {
    pub token: SecretString,
    /// API root including the version prefix, e.g. "https://plausible.io/api/v1/".
    /// Always ends with `/` once normalized.
    pub base_url: String,
    pub user_agent: String,
    /// Request timeout; `None` keeps the HTTP client default
    pub timeout_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
        }
    }

    /// Build from `PLAUSIBLE_TOKEN` (required) and `PLAUSIBLE_BASE_URL`
    pub fn from_env() -> PlausibleResult<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| {
            PlausibleError::Configuration(format!(
                "No API token found. Set the {} environment variable",
                TOKEN_ENV
            ))
        })?;

        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url.trim());
            }
        }

        Ok(config)
    }

    /// Use a self-hosted instance or another API version. A missing
    /// trailing `/` is added.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn validate(&self) -> PlausibleResult<()> {
        if self.token.expose_secret().is_empty() {
            return Err(PlausibleError::Configuration(
                "API token must not be empty".to_string(),
            ));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            PlausibleError::Configuration(format!("invalid base url {}: {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PlausibleError::Configuration(format!(
                "base url must be http or https, got {}",
                url.scheme()
            )));
        }

        if self.timeout_seconds == Some(0) {
            return Err(PlausibleError::Configuration(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

pub(crate) fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}
