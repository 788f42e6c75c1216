//! LoadInstitutionsHandler - institutions known for one author.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::authorship::InstitutionOption;
use crate::domain::foundation::AuthorId;
use crate::ports::AuthorDirectory;

/// Institutions loaded for an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionOptions {
    pub author_id: AuthorId,
    pub institutions: Vec<InstitutionOption>,
    pub degraded: bool,
}

/// Handler for the author-scoped institution list.
pub struct LoadInstitutionsHandler {
    directory: Arc<dyn AuthorDirectory>,
}

impl LoadInstitutionsHandler {
    pub fn new(directory: Arc<dyn AuthorDirectory>) -> Self {
        Self { directory }
    }

    /// Loads the options. Never fails: directory errors yield an empty list.
    pub async fn handle(&self, author_id: &AuthorId) -> InstitutionOptions {
        match self.directory.institutions_for(author_id).await {
            Ok(found) => {
                let mut seen = HashSet::new();
                let institutions: Vec<InstitutionOption> = found
                    .into_iter()
                    .filter(|i| seen.insert(i.institution_id.clone()))
                    .collect();
                debug!(author_id = %author_id, count = institutions.len(), "institutions loaded");
                InstitutionOptions {
                    author_id: author_id.clone(),
                    institutions,
                    degraded: false,
                }
            }
            Err(error) => {
                warn!(author_id = %author_id, error = %error, "institution lookup failed, showing no options");
                InstitutionOptions {
                    author_id: author_id.clone(),
                    institutions: Vec::new(),
                    degraded: true,
                }
            }
        }
    }
}
