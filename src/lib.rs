pub mod error;

// GitHub API access
pub mod github;

// Repository filtering
pub mod filters;

// Search state
pub mod session;

pub mod cli;

// Re-exports
pub use error::{ApiError, Error, ErrorKind, Result};
pub use github::{GitHubClient, GitHubConfig};
pub use session::{LoadState, SearchSession};
