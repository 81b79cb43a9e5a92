use crate::error::ApiError;
use crate::github::{
    config::GitHubConfig,
    models::{GitHubUser, Repository, UserWithRepos},
};
use crate::{Error, Result};
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// GitHub caps `per_page` at 100, larger values are silently reduced
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_PAGE: u32 = 1;

/// Unauthenticated GitHub REST API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        config.validate()?;

        // GitHub rejects requests without a User-Agent
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        // No Authorization header: requests stay within the anonymous rate limit
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| Error::Config(format!("Invalid GitHub API URL: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetch a user's profile
    pub async fn fetch_user(&self, username: &str) -> std::result::Result<GitHubUser, ApiError> {
        let url = self.endpoint(&["users", username]);
        self.get(url, "user").await
    }

    /// Fetch one page of a user's repositories, most recently updated first
    ///
    /// Only the requested page is fetched; following further pages is up to the caller.
    pub async fn fetch_repositories(
        &self,
        username: &str,
        per_page: u32,
        page: u32,
    ) -> std::result::Result<Vec<Repository>, ApiError> {
        let mut url = self.endpoint(&["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("direction", "desc")
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        self.get(url, "repositories").await
    }

    /// Fetch profile and repositories concurrently.
    ///
    /// Fails as soon as either request fails; the other request is dropped and
    /// no partial result is returned.
    pub async fn fetch_user_with_repositories(
        &self,
        username: &str,
    ) -> std::result::Result<UserWithRepos, ApiError> {
        let (user, repos) = tokio::try_join!(
            self.fetch_user(username),
            self.fetch_repositories(username, DEFAULT_PER_PAGE, DEFAULT_PAGE)
        )?;

        debug!("Loaded {} with {} repositories", user.login, repos.len());
        Ok(UserWithRepos { user, repos })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // validate() rejected cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request to GitHub API
    async fn get<T>(&self, url: Url, resource: &str) -> std::result::Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("GitHub API request: GET {}", url);

        let network_error = || ApiError::Network {
            message: format!("Network error while fetching GitHub {resource}"),
        };

        // No response at all (DNS, refused connection, timeout)
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("GitHub API request failed: {e}");
            network_error()
        })?;

        let status = response.status();

        // 404 and 403 get their own kinds, everything else is unknown
        if !status.is_success() {
            let err = classify_status(status);
            warn!("GitHub API error: {} ({})", status, err.kind());
            return Err(err);
        }

        // An unreadable body counts as a network failure too
        response.json::<T>().await.map_err(|e| {
            warn!("Failed to read GitHub API response: {e}");
            network_error()
        })
    }
}

/// Map a non-success status to an error kind
pub fn classify_status(status: StatusCode) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::UserNotFound {
            message: "User not found".to_string(),
            status: status.as_u16(),
        },
        StatusCode::FORBIDDEN => ApiError::RateLimit {
            message: "GitHub API rate limit exceeded".to_string(),
            status: status.as_u16(),
        },
        _ => ApiError::Unknown {
            message: format!("GitHub API error: {status}"),
            status: Some(status.as_u16()),
        },
    }
}
