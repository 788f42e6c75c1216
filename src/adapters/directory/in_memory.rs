//! In-memory author directory for tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use paper_desk::adapters::directory::InMemoryAuthorDirectory;
//!
//! let directory = InMemoryAuthorDirectory::new()
//!     .with_author(AuthorInfo::new(AuthorId::from_number(1), "李雷"))
//!     .with_institution(&AuthorId::from_number(1), InstitutionOption::new(InstitutionId::from_number(9), "清华大学"));
//!
//! let found = directory.search_authors("李").await?;
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::authorship::{AuthorInfo, DirectoryError, InstitutionOption};
use crate::domain::foundation::{AuthSession, AuthorId, UserId};
use crate::ports::{AuthorDirectory, UserProfile};

/// Author directory backed by in-process maps.
///
/// Authors match a query when their id equals it or their name contains it,
/// ignoring case. A forced error makes every call fail.
#[derive(Debug, Default)]
pub struct InMemoryAuthorDirectory {
    authors: RwLock<Vec<AuthorInfo>>,
    institutions: RwLock<HashMap<AuthorId, Vec<InstitutionOption>>>,
    profiles: RwLock<HashMap<UserId, UserProfile>>,
    force_error: RwLock<Option<DirectoryError>>,
    latency: Option<Duration>,
    search_calls: AtomicUsize,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemoryAuthorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(self, author: AuthorInfo) -> Self {
        self.add_author(author);
        self
    }

    /// Registers an institution for an author.
    pub fn with_institution(self, author_id: &AuthorId, institution: InstitutionOption) -> Self {
        write(&self.institutions)
            .entry(author_id.clone())
            .or_default()
            .push(institution);
        self
    }

    /// Registers the author profile returned for a user's session.
    pub fn with_profile(self, user_id: UserId, profile: UserProfile) -> Self {
        write(&self.profiles).insert(user_id, profile);
        self
    }

    /// Forces every call to return the specified error.
    pub fn with_error(self, error: DirectoryError) -> Self {
        *write(&self.force_error) = Some(error);
        self
    }

    /// Delays every response, for exercising out-of-order results.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn clear_error(&self) {
        *write(&self.force_error) = None;
    }

    pub fn add_author(&self, author: AuthorInfo) {
        write(&self.authors).push(author);
    }

    /// Number of author searches served so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<(), DirectoryError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match read(&self.force_error).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthorDirectory for InMemoryAuthorDirectory {
    async fn search_authors(&self, query: &str) -> Result<Vec<AuthorInfo>, DirectoryError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(read(&self.authors)
            .iter()
            .filter(|a| a.author_id.matches(&needle) || a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn institutions_for(
        &self,
        author_id: &AuthorId,
    ) -> Result<Vec<InstitutionOption>, DirectoryError> {
        self.respond().await?;
        Ok(read(&self.institutions)
            .get(author_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn current_profile(&self, session: &AuthSession) -> Result<UserProfile, DirectoryError> {
        self.respond().await?;
        read(&self.profiles)
            .get(session.user_id())
            .cloned()
            .ok_or(DirectoryError::Unauthorized)
    }
}
