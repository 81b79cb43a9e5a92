pub mod commands;

use crate::github::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "github-explorer")]
#[command(about = "Look up a GitHub user's profile and repositories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile and filtered repositories
    User {
        /// GitHub username
        username: String,

        /// Only show repositories whose name contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show repositories with this primary language (case-sensitive)
        #[arg(short, long)]
        language: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List one page of a user's repositories
    Repos {
        /// GitHub username
        username: String,

        /// Results per page (GitHub caps this at 100)
        #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
        per_page: u32,

        /// Page number, starting at 1
        #[arg(long, default_value_t = DEFAULT_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the languages used across a user's repositories
    Languages {
        /// GitHub username
        username: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_command() {
        let cli = Cli::parse_from([
            "github-explorer",
            "user",
            "octocat",
            "--search",
            "hello",
            "-l",
            "Rust",
        ]);
        match cli.command {
            Commands::User {
                username,
                search,
                language,
                json,
            } => {
                assert_eq!(username, "octocat");
                assert_eq!(search, "hello");
                assert_eq!(language.as_deref(), Some("Rust"));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_repos_defaults() {
        let cli = Cli::parse_from(["github-explorer", "repos", "octocat"]);
        match cli.command {
            Commands::Repos { per_page, page, .. } => {
                assert_eq!(per_page, 100);
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_repos_rejects_page_zero() {
        let result = Cli::try_parse_from(["github-explorer", "repos", "octocat", "--page", "0"]);
        assert!(result.is_err());
    }
}
