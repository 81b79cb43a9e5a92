//! Client-side filtering of a fetched repository list.
//!
//! Every function borrows the full list and never mutates it. When a filter
//! is inactive the input slice is handed back as `Cow::Borrowed`; otherwise
//! the matching repositories are cloned out in their original order.

use crate::github::models::Repository;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Keep repositories whose name contains `term`, ignoring case.
///
/// A blank term disables the filter.
pub fn filter_by_search_term<'a>(repos: &'a [Repository], term: &str) -> Cow<'a, [Repository]> {
    let term = normalize_term(term);
    if term.is_empty() {
        return Cow::Borrowed(repos);
    }

    Cow::Owned(
        repos
            .iter()
            .filter(|repo| name_matches(repo, &term))
            .cloned()
            .collect(),
    )
}

/// Keep repositories whose primary language is exactly `language`.
///
/// `None` (or an empty string) shows everything. Matching is case-sensitive
/// against the tag GitHub reports.
pub fn filter_by_language<'a>(
    repos: &'a [Repository],
    language: Option<&str>,
) -> Cow<'a, [Repository]> {
    let Some(language) = active_language(language) else {
        return Cow::Borrowed(repos);
    };

    Cow::Owned(
        repos
            .iter()
            .filter(|repo| language_matches(repo, language))
            .cloned()
            .collect(),
    )
}

/// Intersection of [`filter_by_search_term`] and [`filter_by_language`].
pub fn apply_filters<'a>(
    repos: &'a [Repository],
    term: &str,
    language: Option<&str>,
) -> Cow<'a, [Repository]> {
    let term = normalize_term(term);
    let language = active_language(language);

    if term.is_empty() && language.is_none() {
        return Cow::Borrowed(repos);
    }

    Cow::Owned(
        repos
            .iter()
            .filter(|repo| term.is_empty() || name_matches(repo, &term))
            .filter(|repo| language.map_or(true, |lang| language_matches(repo, lang)))
            .cloned()
            .collect(),
    )
}

/// Distinct languages present in `repos`, sorted.
pub fn extract_languages(repos: &[Repository]) -> Vec<String> {
    repos
        .iter()
        .filter_map(|repo| active_language(repo.language.as_deref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

fn active_language(language: Option<&str>) -> Option<&str> {
    language.filter(|lang| !lang.is_empty())
}

fn name_matches(repo: &Repository, normalized_term: &str) -> bool {
    repo.name.to_lowercase().contains(normalized_term)
}

fn language_matches(repo: &Repository, language: &str) -> bool {
    repo.language.as_deref() == Some(language)
}
