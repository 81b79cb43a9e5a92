use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// GitHub user profile from `/users/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: String,
}

impl GitHubUser {
    /// Account creation date as "Jan 2008"
    pub fn joined_label(&self) -> Option<String> {
        parse_timestamp(&self.created_at).map(|ts| ts.format("%b %Y").to_string())
    }

    /// Blog link as an absolute URL; GitHub stores whatever the user typed
    pub fn blog_url(&self) -> Option<String> {
        let blog = self.blog.as_deref().map(str::trim).filter(|b| !b.is_empty())?;
        if blog.starts_with("http") {
            Some(blog.to_string())
        } else {
            Some(format!("https://{blog}"))
        }
    }
}

/// Repository entry from `/users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub archived: bool,
    pub fork: bool,
    pub updated_at: String,
}

impl Repository {
    /// Last update as "Jan 1"
    pub fn updated_label(&self) -> Option<String> {
        parse_timestamp(&self.updated_at).map(|ts| ts.format("%b %-d").to_string())
    }
}

/// Profile and first page of repositories from one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithRepos {
    pub user: GitHubUser,
    pub repos: Vec<Repository>,
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octocat() -> GitHubUser {
        serde_json::from_str(
            r#"{
                "login": "octocat",
                "id": 1,
                "node_id": "MDQ6VXNlcjE=",
                "avatar_url": "https://github.com/images/octocat.png",
                "html_url": "https://github.com/octocat",
                "type": "User",
                "name": "The Octocat",
                "company": "GitHub",
                "blog": "github.blog",
                "location": "San Francisco",
                "bio": null,
                "public_repos": 10,
                "followers": 1000,
                "following": 5,
                "created_at": "2008-01-14T04:33:35Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user = octocat();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.bio, None);
        assert_eq!(user.public_repos, 10);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result = serde_json::from_str::<Repository>(r#"{"id": 1, "name": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_joined_label() {
        assert_eq!(octocat().joined_label().as_deref(), Some("Jan 2008"));

        let mut user = octocat();
        user.created_at = "yesterday".to_string();
        assert_eq!(user.joined_label(), None);
    }

    #[test]
    fn test_blog_url() {
        let mut user = octocat();
        assert_eq!(user.blog_url().as_deref(), Some("https://github.blog"));

        user.blog = Some("http://example.com".to_string());
        assert_eq!(user.blog_url().as_deref(), Some("http://example.com"));

        user.blog = Some(String::new());
        assert_eq!(user.blog_url(), None);

        user.blog = None;
        assert_eq!(user.blog_url(), None);
    }

    #[test]
    fn test_updated_label() {
        let repo = Repository {
            id: 1,
            name: "hello-world".to_string(),
            full_name: "octocat/hello-world".to_string(),
            html_url: "https://github.com/octocat/hello-world".to_string(),
            description: None,
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            archived: false,
            fork: false,
            updated_at: "2024-03-05T10:00:00Z".to_string(),
        };
        assert_eq!(repo.updated_label().as_deref(), Some("Mar 5"));
    }
}
