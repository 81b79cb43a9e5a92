use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable category of a GitHub API failure, used for programmatic branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    UserNotFound,
    RateLimit,
    Network,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UserNotFound => "USER_NOT_FOUND",
            ErrorKind::RateLimit => "RATE_LIMIT",
            ErrorKind::Network => "NETWORK",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified failure of a request against the GitHub API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The handle does not exist (HTTP 404)
    #[error("{message}")]
    UserNotFound { message: String, status: u16 },

    /// GitHub answered 403, which it also uses to signal quota exhaustion
    #[error("{message}")]
    RateLimit { message: String, status: u16 },

    /// No response arrived at all
    #[error("{message}")]
    Network { message: String },

    /// Any other non-success status, or a rejected request made locally
    #[error("{message}")]
    Unknown {
        message: String,
        status: Option<u16>,
    },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::UserNotFound { .. } => ErrorKind::UserNotFound,
            ApiError::RateLimit { .. } => ErrorKind::RateLimit,
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::UserNotFound { message, .. }
            | ApiError::RateLimit { message, .. }
            | ApiError::Network { message }
            | ApiError::Unknown { message, .. } => message,
        }
    }

    /// HTTP status that produced this error, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UserNotFound { status, .. } | ApiError::RateLimit { status, .. } => {
                Some(*status)
            }
            ApiError::Network { .. } => None,
            ApiError::Unknown { status, .. } => *status,
        }
    }

    /// Fixed sentence to show an end user for this kind of failure
    pub fn user_message(&self) -> String {
        match self {
            ApiError::UserNotFound { .. } => {
                "User not found. Please check the username and try again.".to_string()
            }
            ApiError::RateLimit { .. } => {
                "GitHub API rate limit exceeded. Please try again later.".to_string()
            }
            ApiError::Network { .. } => {
                "Network error while contacting GitHub. Please retry.".to_string()
            }
            ApiError::Unknown { message, .. } => message.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error ({kind}): {0}", kind = .0.kind())]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(ErrorKind::UserNotFound.to_string(), "USER_NOT_FOUND");
        assert_eq!(ErrorKind::RateLimit.to_string(), "RATE_LIMIT");
        assert_eq!(ErrorKind::Network.to_string(), "NETWORK");
        assert_eq!(ErrorKind::Unknown.to_string(), "UNKNOWN");

        let json = serde_json::to_string(&ErrorKind::UserNotFound).unwrap();
        assert_eq!(json, "\"USER_NOT_FOUND\"");
    }

    #[test]
    fn test_status_per_variant() {
        let not_found = ApiError::UserNotFound {
            message: "User not found".to_string(),
            status: 404,
        };
        assert_eq!(not_found.status(), Some(404));
        assert_eq!(not_found.kind(), ErrorKind::UserNotFound);

        let network = ApiError::Network {
            message: "offline".to_string(),
        };
        assert_eq!(network.status(), None);

        let blank = ApiError::Unknown {
            message: "Please enter a GitHub username".to_string(),
            status: None,
        };
        assert_eq!(blank.status(), None);
        assert_eq!(blank.to_string(), "Please enter a GitHub username");
    }

    #[test]
    fn test_user_message() {
        let rate_limited = ApiError::RateLimit {
            message: "GitHub API rate limit exceeded".to_string(),
            status: 403,
        };
        assert_eq!(
            rate_limited.user_message(),
            "GitHub API rate limit exceeded. Please try again later."
        );

        let unknown = ApiError::Unknown {
            message: "GitHub API error: 500 Internal Server Error".to_string(),
            status: Some(500),
        };
        assert_eq!(unknown.user_message(), unknown.message());
    }

    #[test]
    fn test_crate_error_wraps_api_error() {
        let err: Error = ApiError::Network {
            message: "Network error while fetching GitHub user".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "GitHub API error (NETWORK): Network error while fetching GitHub user"
        );
    }
}
