//! LinkedAuthorRow - author ⇄ institution linkage of one author row.
//!
//! Institutions are scoped to an author, so a row moves through three phases:
//! no author, author selected, author and institution linked. Choosing an
//! institution locks the author field; clearing the institution unlocks it.
//! Choosing a different author always drops the institution.
//!
//! The first row of a paper is the submitting user's own slot. Once bound to
//! the user's profile its author is locked for good, and it is always the
//! corresponding author.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AuthorEntry, AuthorInfo, AuthorshipError, InstitutionOption};
use crate::domain::foundation::StateMachine;

/// Phase of an author row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkPhase {
    #[default]
    NoAuthor,
    AuthorSelected,
    Linked,
}

impl StateMachine for LinkPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use LinkPhase::*;
        matches!(
            (self, target),
            (NoAuthor, AuthorSelected)
                | (AuthorSelected, AuthorSelected)
                | (AuthorSelected, NoAuthor)
                | (AuthorSelected, Linked)
                | (Linked, AuthorSelected)
                | (Linked, Linked)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LinkPhase::*;
        match self {
            NoAuthor => vec![AuthorSelected],
            AuthorSelected => vec![AuthorSelected, NoAuthor, Linked],
            Linked => vec![AuthorSelected, Linked],
        }
    }
}

/// Selection held by a row. An institution cannot exist without its author.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Linkage {
    #[default]
    NoAuthor,
    AuthorSelected {
        author: AuthorInfo,
    },
    Linked {
        author: AuthorInfo,
        institution: InstitutionOption,
    },
}

impl Linkage {
    pub fn phase(&self) -> LinkPhase {
        match self {
            Linkage::NoAuthor => LinkPhase::NoAuthor,
            Linkage::AuthorSelected { .. } => LinkPhase::AuthorSelected,
            Linkage::Linked { .. } => LinkPhase::Linked,
        }
    }

    pub fn author(&self) -> Option<&AuthorInfo> {
        match self {
            Linkage::NoAuthor => None,
            Linkage::AuthorSelected { author } | Linkage::Linked { author, .. } => Some(author),
        }
    }

    pub fn institution(&self) -> Option<&InstitutionOption> {
        match self {
            Linkage::Linked { institution, .. } => Some(institution),
            _ => None,
        }
    }
}

const LOCKED_BY_INSTITUTION_HINT: &str = "已选择单位，作者输入框已锁定。清空单位可解锁作者输入框。";
const CHOOSE_AUTHOR_FIRST_HINT: &str = "请先选择作者，然后选择对应的工作单位";

/// One editable author row of the submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedAuthorRow {
    linkage: Linkage,
    is_corresponding: bool,
    is_first: bool,
    profile_bound: bool,
}

impl LinkedAuthorRow {
    /// An empty co-author row.
    pub fn new() -> Self {
        Self {
            linkage: Linkage::NoAuthor,
            is_corresponding: false,
            is_first: false,
            profile_bound: false,
        }
    }

    /// The first-author row, always corresponding.
    pub fn first_author() -> Self {
        Self {
            is_corresponding: true,
            is_first: true,
            ..Self::new()
        }
    }

    /// Restores a row from a saved entry (edit forms).
    ///
    /// An institution saved without an author is dropped. Institution details
    /// are taken from `institution_info` when its id matches.
    pub fn from_entry(entry: &AuthorEntry, is_first: bool) -> Self {
        let author = match (&entry.author_info, &entry.author_id) {
            (Some(info), _) => Some(info.clone()),
            (None, Some(id)) => Some(AuthorInfo::new(id.clone(), "")),
            (None, None) => None,
        };
        let institution = entry.institution_id.as_ref().map(|id| {
            entry
                .institution_info
                .as_ref()
                .filter(|info| &info.institution_id == id)
                .cloned()
                .unwrap_or_else(|| InstitutionOption::new(id.clone(), ""))
        });
        let linkage = match (author, institution) {
            (None, _) => Linkage::NoAuthor,
            (Some(author), None) => Linkage::AuthorSelected { author },
            (Some(author), Some(institution)) => Linkage::Linked {
                author,
                institution,
            },
        };
        Self {
            linkage,
            is_corresponding: is_first || entry.is_corresponding,
            is_first,
            profile_bound: false,
        }
    }

    pub fn phase(&self) -> LinkPhase {
        self.linkage.phase()
    }

    pub fn linkage(&self) -> &Linkage {
        &self.linkage
    }

    pub fn author(&self) -> Option<&AuthorInfo> {
        self.linkage.author()
    }

    pub fn institution(&self) -> Option<&InstitutionOption> {
        self.linkage.institution()
    }

    pub fn is_first(&self) -> bool {
        self.is_first
    }

    pub fn is_corresponding(&self) -> bool {
        self.is_corresponding
    }

    pub fn is_profile_bound(&self) -> bool {
        self.profile_bound
    }

    /// Returns true if the author search field must not accept edits.
    pub fn author_locked(&self) -> bool {
        self.profile_bound || self.phase() == LinkPhase::Linked
    }

    /// Returns true if the institution field has no author to scope it.
    pub fn institution_disabled(&self) -> bool {
        self.phase() == LinkPhase::NoAuthor
    }

    /// Selects an author, dropping any chosen institution.
    pub fn select_author(&mut self, author: AuthorInfo) -> Result<LinkPhase, AuthorshipError> {
        if self.profile_bound {
            return Err(AuthorshipError::AuthorLocked);
        }
        let next = self.phase().transition_to(LinkPhase::AuthorSelected)?;
        self.linkage = Linkage::AuthorSelected { author };
        Ok(next)
    }

    /// Clears the author. Refused while an institution depends on it.
    pub fn clear_author(&mut self) -> Result<LinkPhase, AuthorshipError> {
        if self.author_locked() {
            return Err(AuthorshipError::AuthorLocked);
        }
        if self.phase() == LinkPhase::NoAuthor {
            return Ok(LinkPhase::NoAuthor);
        }
        let next = self.phase().transition_to(LinkPhase::NoAuthor)?;
        self.linkage = Linkage::NoAuthor;
        Ok(next)
    }

    /// Chooses an institution for the selected author, locking the author.
    pub fn select_institution(
        &mut self,
        institution: InstitutionOption,
    ) -> Result<LinkPhase, AuthorshipError> {
        let author = self
            .linkage
            .author()
            .cloned()
            .ok_or(AuthorshipError::AuthorRequired)?;
        let next = self.phase().transition_to(LinkPhase::Linked)?;
        self.linkage = Linkage::Linked {
            author,
            institution,
        };
        Ok(next)
    }

    /// Clears the institution, unlocking the author. The author is kept.
    pub fn clear_institution(&mut self) -> LinkPhase {
        if let Linkage::Linked { author, .. } = &self.linkage {
            self.linkage = Linkage::AuthorSelected {
                author: author.clone(),
            };
        }
        self.phase()
    }

    /// Sets the corresponding-author flag and returns the effective value.
    ///
    /// The first-author row stays corresponding whatever is requested.
    pub fn set_corresponding(&mut self, requested: bool) -> bool {
        if self.is_first {
            if !requested {
                debug!("ignoring attempt to unset corresponding flag on first author");
            }
            return true;
        }
        self.is_corresponding = requested;
        self.is_corresponding
    }

    /// Binds the first-author row to the current user's author profile.
    ///
    /// Only applies to the first row. An empty row is filled with the profile;
    /// a row already holding the profile's author is locked in place. Rows
    /// holding someone else are left alone. Returns true when the row ends up
    /// bound.
    pub fn bind_profile(&mut self, profile: &AuthorInfo) -> bool {
        if !self.is_first {
            return false;
        }
        match self.linkage.author() {
            None => {
                self.linkage = Linkage::AuthorSelected {
                    author: profile.clone(),
                };
                self.profile_bound = true;
            }
            Some(author) if author.author_id == profile.author_id => {
                self.profile_bound = true;
            }
            Some(_) => {}
        }
        self.is_corresponding = true;
        self.profile_bound
    }

    /// Inline hint shown under the row, if any.
    pub fn status_hint(&self) -> Option<String> {
        if self.profile_bound {
            return self
                .author()
                .map(|a| format!("作者1已自动锁定为当前账号所有人：{}", a.name));
        }
        match self.phase() {
            LinkPhase::NoAuthor => Some(CHOOSE_AUTHOR_FIRST_HINT.to_string()),
            LinkPhase::Linked if !self.is_first => Some(LOCKED_BY_INSTITUTION_HINT.to_string()),
            _ => None,
        }
    }

    /// The row as sent to the backend.
    pub fn to_entry(&self) -> AuthorEntry {
        let author = self.author();
        let institution = self.institution();
        AuthorEntry {
            author_id: author.map(|a| a.author_id.clone()),
            author_info: author.cloned(),
            institution_id: institution.map(|i| i.institution_id.clone()),
            institution_info: institution.cloned(),
            is_corresponding: self.is_corresponding,
        }
    }
}

impl Default for LinkedAuthorRow {
    fn default() -> Self {
        Self::new()
    }
}
