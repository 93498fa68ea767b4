use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::error::{IntercomError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.intercom.io";

const ENV_ACCESS_TOKEN: &str = "INTERCOM_ACCESS_TOKEN";
const ENV_BASE_URL: &str = "INTERCOM_BASE_URL";

/// Connection settings for the API client: where to talk to and which
/// access token to present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Point the client somewhere other than the production API, e.g. a
    /// regional host or a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `INTERCOM_ACCESS_TOKEN` (required) and `INTERCOM_BASE_URL`
    /// (optional) from the environment.
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var(ENV_ACCESS_TOKEN).map_err(|_| IntercomError::Config {
            message: format!("{} is not set", ENV_ACCESS_TOKEN),
        })?;
        let config = Self::new(access_token);
        match std::env::var(ENV_BASE_URL) {
            Ok(base_url) => Ok(config.with_base_url(base_url)),
            Err(_) => Ok(config),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(IntercomError::Config {
                message: "access_token cannot be empty".to_string(),
            });
        }
        let url = Url::parse(&self.base_url).map_err(|e| IntercomError::Config {
            message: format!("invalid base_url {}: {}", self.base_url, e),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IntercomError::Config {
                message: format!("unsupported base_url scheme: {}", scheme),
            }),
        }
    }
}
