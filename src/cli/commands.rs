use crate::error::ApiError;
use crate::filters::extract_languages;
use crate::github::{
    normalize_handle, GitHubClient, GitHubUser, Repository, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
use crate::session::SearchSession;
use crate::{Error, Result};
use serde::Serialize;

/// Load a user, apply the filters and print profile plus matching repositories
pub async fn show_user(
    client: &GitHubClient,
    username: &str,
    search: &str,
    language: Option<String>,
    json: bool,
) -> Result<()> {
    let mut session = SearchSession::new();
    session.load(client, username).await;

    if let Some(e) = session.error() {
        return Err(Error::Api(e.clone()));
    }

    session.set_search_term(search);
    session.set_language(language);

    let Some(result) = session.result() else {
        return Err(Error::Api(ApiError::Unknown {
            message: "Unknown error".to_string(),
            status: None,
        }));
    };

    let languages = session.languages();
    let visible = session.visible_repositories();

    if json {
        let report = UserReport {
            user: &result.user,
            languages: &languages,
            repos: &visible,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_profile(&result.user));
    if !languages.is_empty() {
        println!("Languages: {}", languages.join(", "));
    }
    println!(
        "\nShowing {} of {} repositories",
        visible.len(),
        result.repos.len()
    );
    print!("{}", render_repositories(&visible));

    Ok(())
}

/// Print one page of repositories
pub async fn list_repositories(
    client: &GitHubClient,
    username: &str,
    per_page: u32,
    page: u32,
    json: bool,
) -> Result<()> {
    let handle = normalize_handle(username)?;
    let repos = client.fetch_repositories(&handle, per_page, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repos)?);
    } else {
        print!("{}", render_repositories(&repos));
        println!("\nPage {page} ({per_page} per page)");
    }

    Ok(())
}

/// Print the distinct languages of a user's first page of repositories
pub async fn list_languages(client: &GitHubClient, username: &str) -> Result<()> {
    let handle = normalize_handle(username)?;
    let repos = client
        .fetch_repositories(&handle, DEFAULT_PER_PAGE, DEFAULT_PAGE)
        .await?;

    for language in extract_languages(&repos) {
        println!("{language}");
    }

    Ok(())
}

#[derive(Serialize)]
struct UserReport<'a> {
    user: &'a GitHubUser,
    languages: &'a [String],
    repos: &'a [Repository],
}

pub fn render_profile(user: &GitHubUser) -> String {
    let mut out = String::new();

    match &user.name {
        Some(name) => out.push_str(&format!("{name} (@{})\n", user.login)),
        None => out.push_str(&format!("@{}\n", user.login)),
    }
    if let Some(bio) = &user.bio {
        out.push_str(&format!("{bio}\n"));
    }
    out.push_str(&format!("{}\n", user.html_url));

    let details: Vec<String> = [
        user.company.clone(),
        user.location.clone(),
        user.blog_url(),
        user.joined_label().map(|date| format!("Joined {date}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        out.push_str(&format!("{}\n", details.join(" · ")));
    }

    out.push_str(&format!(
        "{} repos · {} followers · {} following\n",
        user.public_repos, user.followers, user.following
    ));
    out
}

pub fn render_repositories(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return "No repositories found\n".to_string();
    }

    let mut out = format!(
        "\n{:<40} {:<16} {:>7} {:>6} {:<8}\n",
        "Name", "Language", "Stars", "Forks", "Updated"
    );
    out.push_str(&format!("{}\n", "-".repeat(81)));

    for repo in repos {
        let mut name = truncate(&repo.name, 32);
        if repo.fork {
            name.push_str(" [fork]");
        }
        if repo.archived {
            name.push_str(" [arch]");
        }

        out.push_str(&format!(
            "{:<40} {:<16} {:>7} {:>6} {:<8}\n",
            name,
            truncate(repo.language.as_deref().unwrap_or("-"), 16),
            repo.stargazers_count,
            repo.forks_count,
            repo.updated_label().unwrap_or_default()
        ));
    }

    out
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
