use crate::{Error, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// GitHub API client configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the REST API (overridable for testing)
    pub api_base_url: String,

    /// User-Agent header sent with every request (GitHub rejects requests without one)
    pub user_agent: String,

    /// Transport timeout in seconds, 0 disables it
    pub timeout_secs: u64,
}

impl GitHubConfig {
    /// Create a new GitHubConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("GITHUB_API_URL").unwrap_or(defaults.api_base_url),
            user_agent: env::var("GITHUB_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs: env::var("GITHUB_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Config pointing at another API root, e.g. a mock server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_base_url).map_err(|e| {
            Error::Config(format!("Invalid GITHUB_API_URL '{}': {e}", self.api_base_url))
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "GITHUB_API_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("GITHUB_USER_AGENT cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("github-explorer/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}
