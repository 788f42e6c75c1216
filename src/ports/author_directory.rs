//! Author directory port - backend lookups behind the author row widgets.
//!
//! Three read-only queries back the submission form: free-text author
//! search, the institutions known for one author, and the signed-in user's
//! own author profile (used to pre-fill the first author row).
//!
//! # Contract
//!
//! Implementations must:
//! - Return an empty list, not an error, when nothing matches
//! - Return `DirectoryError::Unauthorized` when the session is rejected
//! - Return `DirectoryError::Unavailable` for transient failures
//! - Return `DirectoryError::Malformed` when the response cannot be decoded

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::authorship::{AuthorInfo, DirectoryError, InstitutionOption};
use crate::domain::foundation::{AuthSession, AuthorId};

/// The signed-in user's author profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub author_id: AuthorId,
    #[serde(default)]
    pub name: String,
}

impl UserProfile {
    pub fn new(author_id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            author_id,
            name: name.into(),
        }
    }

    pub fn as_author(&self) -> AuthorInfo {
        AuthorInfo::new(self.author_id.clone(), self.name.clone())
    }
}

/// Read access to authors and their institutions.
#[async_trait]
pub trait AuthorDirectory: Send + Sync {
    /// Authors whose name or id matches the query.
    async fn search_authors(&self, query: &str) -> Result<Vec<AuthorInfo>, DirectoryError>;

    /// Institutions the author is affiliated with.
    async fn institutions_for(
        &self,
        author_id: &AuthorId,
    ) -> Result<Vec<InstitutionOption>, DirectoryError>;

    /// The author profile of the session's user.
    async fn current_profile(&self, session: &AuthSession) -> Result<UserProfile, DirectoryError>;
}
