//! SearchAuthorsHandler - debounced author search with graceful degradation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::Debouncer;
use crate::config::SearchConfig;
use crate::domain::authorship::AuthorInfo;
use crate::ports::AuthorDirectory;

/// Query for authors matching typed text.
#[derive(Debug, Clone)]
pub struct SearchAuthorsQuery {
    pub term: String,
}

impl SearchAuthorsQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

/// Suggestions for one search term.
///
/// `term` is the trimmed term the results belong to; hand it back to
/// `AuthorSearchField::apply_results` so stale results are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSuggestions {
    pub term: String,
    pub authors: Vec<AuthorInfo>,
    /// True when the directory failed and the list is empty for that reason.
    pub degraded: bool,
}

impl AuthorSuggestions {
    fn empty(term: String, degraded: bool) -> Self {
        Self {
            term,
            authors: Vec::new(),
            degraded,
        }
    }
}

/// Handler for author search.
pub struct SearchAuthorsHandler {
    directory: Arc<dyn AuthorDirectory>,
    debouncer: Debouncer,
    min_query_len: usize,
    max_suggestions: usize,
}

impl SearchAuthorsHandler {
    pub fn new(directory: Arc<dyn AuthorDirectory>, config: &SearchConfig) -> Self {
        Self {
            directory,
            debouncer: Debouncer::new(config.debounce()),
            min_query_len: config.min_query_len.max(1),
            max_suggestions: config.max_suggestions,
        }
    }

    /// Debounced search. Returns `None` when a newer query superseded this one.
    pub async fn handle(&self, query: SearchAuthorsQuery) -> Option<AuthorSuggestions> {
        let term = self.debouncer.settle(query.term.trim().to_string()).await?;
        Some(self.search_now(&term).await)
    }

    /// Searches immediately. Never fails: directory errors yield no
    /// suggestions.
    pub async fn search_now(&self, term: &str) -> AuthorSuggestions {
        let term = term.trim().to_string();
        if term.chars().count() < self.min_query_len {
            return AuthorSuggestions::empty(term, false);
        }

        match self.directory.search_authors(&term).await {
            Ok(found) => {
                let mut seen = HashSet::new();
                let authors: Vec<AuthorInfo> = found
                    .into_iter()
                    .filter(|a| seen.insert(a.author_id.clone()))
                    .take(self.max_suggestions)
                    .collect();
                debug!(term = %term, count = authors.len(), "author search completed");
                AuthorSuggestions {
                    term,
                    authors,
                    degraded: false,
                }
            }
            Err(error) => {
                warn!(term = %term, error = %error, "author search failed, showing no suggestions");
                AuthorSuggestions::empty(term, true)
            }
        }
    }
}
