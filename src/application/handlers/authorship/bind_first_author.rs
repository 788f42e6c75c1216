//! BindFirstAuthorHandler - pre-fills the first author row from the profile.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::authorship::{AuthorInfo, AuthorRoster};
use crate::domain::foundation::{DomainError, ErrorCode, SessionContext};
use crate::ports::AuthorDirectory;

/// What happened to the first author row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// The row now holds, and is locked to, the user's author profile.
    Bound(AuthorInfo),
    /// The row already holds another author and was left editable.
    Skipped,
}

/// Handler binding the first author row to the signed-in user.
pub struct BindFirstAuthorHandler {
    directory: Arc<dyn AuthorDirectory>,
}

impl BindFirstAuthorHandler {
    pub fn new(directory: Arc<dyn AuthorDirectory>) -> Self {
        Self { directory }
    }

    /// Fetches the user's profile and binds it to row 0 of the roster.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` when no session is active
    /// - the directory error, mapped to a `DomainError`, when the profile
    ///   cannot be loaded; the row stays editable
    pub async fn handle(
        &self,
        session: &SessionContext,
        roster: &mut AuthorRoster,
    ) -> Result<BindOutcome, DomainError> {
        let current = session
            .current()
            .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Sign in to submit a paper"))?;

        let profile = self.directory.current_profile(current).await.map_err(|error| {
            warn!(user_id = %current.user_id(), error = %error, "could not load author profile");
            DomainError::from(error)
        })?;

        let author = profile.as_author();
        if roster.first_input_mut().bind_profile(&author) {
            info!(user_id = %current.user_id(), author_id = %author.author_id, "first author bound to profile");
            Ok(BindOutcome::Bound(author))
        } else {
            Ok(BindOutcome::Skipped)
        }
    }
}
