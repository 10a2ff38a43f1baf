//! Client configuration

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the backend base URL. Mandatory: there is no
/// built-in fallback host, so a missing value fails at startup instead of
/// silently pointing at a development endpoint.
pub const API_URL_VAR: &str = "PLATEFUL_API_URL";

/// Optional bearer-token override; wins over the stored session.
pub const API_TOKEN_VAR: &str = "PLATEFUL_API_TOKEN";

/// Optional request timeout override, in seconds.
pub const HTTP_TIMEOUT_VAR: &str = "PLATEFUL_HTTP_TIMEOUT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the Plateful backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.plateful.example")
    pub base_url: String,

    /// Bearer token for authenticated endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read configuration from the environment
    ///
    /// `PLATEFUL_API_URL` is required; `PLATEFUL_API_TOKEN` and
    /// `PLATEFUL_HTTP_TIMEOUT` are optional.
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var(API_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ClientError::MissingConfig(API_URL_VAR))?;

        let mut config = Self::new(base_url);

        if let Ok(token) = std::env::var(API_TOKEN_VAR)
            && !token.trim().is_empty()
        {
            config.token = Some(token);
        }

        if let Ok(raw) = std::env::var(HTTP_TIMEOUT_VAR)
            && let Ok(secs) = raw.parse::<u64>()
        {
            config.timeout = secs;
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}
