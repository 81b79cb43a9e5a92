pub mod client;
pub mod config;
pub mod handle;
pub mod models;

pub use client::{GitHubClient, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use config::GitHubConfig;
pub use handle::normalize_handle;
pub use models::{GitHubUser, Repository, UserWithRepos};
