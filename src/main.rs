use clap::Parser;
use github_explorer::{
    cli::{commands, Cli, Commands},
    github::{GitHubClient, GitHubConfig},
    Error, Result,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,github_explorer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Api(e)) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = GitHubConfig::from_env();
    debug!("Using GitHub API at {}", config.api_base_url);
    let client = GitHubClient::new(config)?;

    match cli.command {
        Commands::User {
            username,
            search,
            language,
            json,
        } => commands::show_user(&client, &username, &search, language, json).await,
        Commands::Repos {
            username,
            per_page,
            page,
            json,
        } => commands::list_repositories(&client, &username, per_page, page, json).await,
        Commands::Languages { username } => commands::list_languages(&client, &username).await,
    }
}
