use crate::error::ApiError;
use crate::filters::{apply_filters, extract_languages};
use crate::github::{normalize_handle, GitHubClient, Repository, UserWithRepos};
use std::borrow::Cow;
use tracing::{debug, info};

/// Where the current search stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        handle: String,
    },
    Succeeded(UserWithRepos),
    Failed(ApiError),
}

/// Handed out when a search starts; settling with an outdated ticket is a no-op
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    handle: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }
}

/// State of one user's searches: the latest settled result plus the active filters.
///
/// Each new search bumps a generation counter. A result only lands if it was
/// started by the most recent search, so a slow response for an abandoned
/// username can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: LoadState,
    generation: u64,
    search_term: String,
    selected_language: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `input`.
    ///
    /// Returns `None` for a blank username; the session then holds the
    /// rejection error and no request should be made.
    pub fn begin(&mut self, input: &str) -> Option<LoadTicket> {
        self.generation += 1;
        self.search_term.clear();
        self.selected_language = None;

        match normalize_handle(input) {
            Ok(handle) => {
                debug!("Search #{} started for {}", self.generation, handle);
                self.state = LoadState::Loading {
                    handle: handle.clone(),
                };
                Some(LoadTicket {
                    generation: self.generation,
                    handle,
                })
            }
            Err(e) => {
                self.state = LoadState::Failed(e);
                None
            }
        }
    }

    /// Record the outcome of a search. Returns false if the search was superseded.
    pub fn settle(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<UserWithRepos, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale result for {} (search #{}, current #{})",
                ticket.handle, ticket.generation, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                info!(
                    "Loaded {} ({} repositories)",
                    result.user.login,
                    result.repos.len()
                );
                LoadState::Succeeded(result)
            }
            Err(e) => {
                info!("Search for {} failed: {} ({})", ticket.handle, e, e.kind());
                LoadState::Failed(e)
            }
        };
        true
    }

    /// Run one complete search against `client`
    ///
    /// Holds the session for the whole request, so nothing can supersede it.
    /// Callers that start searches while another is in flight should use
    /// [`begin`](Self::begin) and [`settle`](Self::settle) instead.
    pub async fn load(&mut self, client: &GitHubClient, input: &str) {
        let Some(ticket) = self.begin(input) else {
            return;
        };
        let outcome = client.fetch_user_with_repositories(ticket.handle()).await;
        self.settle(ticket, outcome);
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    pub fn result(&self) -> Option<&UserWithRepos> {
        match &self.state {
            LoadState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn selected_language(&self) -> Option<&str> {
        self.selected_language.as_deref()
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.selected_language = language;
    }

    /// Languages available for filtering in the current result
    pub fn languages(&self) -> Vec<String> {
        self.result()
            .map(|result| extract_languages(&result.repos))
            .unwrap_or_default()
    }

    /// Repositories of the current result after applying both filters
    pub fn visible_repositories(&self) -> Cow<'_, [Repository]> {
        match self.result() {
            Some(result) => apply_filters(
                &result.repos,
                &self.search_term,
                self.selected_language.as_deref(),
            ),
            None => Cow::Borrowed(&[]),
        }
    }
}
