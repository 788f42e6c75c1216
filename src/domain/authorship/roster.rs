//! AuthorRoster - the ordered author rows of one paper form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AuthorEntry, AuthorRowInput, AuthorshipError, LinkedAuthorRow};

const DEFAULT_MIN_QUERY_LEN: usize = 1;

/// How many rows may carry the corresponding-author flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorrespondingPolicy {
    /// Any row may be marked corresponding.
    #[default]
    AllowMultiple,
    /// Only the first author is corresponding; other rows cannot be marked.
    Exclusive,
}

/// Author rows of a paper. Row 0 is the first author and always exists.
///
/// Rows are edited through their [`AuthorRowInput`], which keeps the
/// author and institution pickers in step with the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRoster {
    rows: Vec<AuthorRowInput>,
    policy: CorrespondingPolicy,
    min_query_len: usize,
}

impl AuthorRoster {
    pub fn new(policy: CorrespondingPolicy) -> Self {
        Self {
            rows: vec![AuthorRowInput::first_author(DEFAULT_MIN_QUERY_LEN)],
            policy,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }

    /// Rebuilds a roster from saved entries. An empty list yields a fresh roster.
    pub fn from_entries(entries: &[AuthorEntry], policy: CorrespondingPolicy) -> Self {
        if entries.is_empty() {
            return Self::new(policy);
        }
        let rows = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut row = LinkedAuthorRow::from_entry(entry, i == 0);
                if i > 0 && policy == CorrespondingPolicy::Exclusive {
                    row.set_corresponding(false);
                }
                AuthorRowInput::new(row, DEFAULT_MIN_QUERY_LEN)
            })
            .collect();
        Self {
            rows,
            policy,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }

    /// Sets the shortest author search term for every row, present and future.
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len.max(1);
        for row in &mut self.rows {
            row.set_min_query_len(self.min_query_len);
        }
        self
    }

    pub fn policy(&self) -> CorrespondingPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn inputs(&self) -> &[AuthorRowInput] {
        &self.rows
    }

    pub fn first_author(&self) -> &LinkedAuthorRow {
        self.rows[0].row()
    }

    pub fn first_input_mut(&mut self) -> &mut AuthorRowInput {
        &mut self.rows[0]
    }

    pub fn row(&self, index: usize) -> Result<&LinkedAuthorRow, AuthorshipError> {
        self.input(index).map(AuthorRowInput::row)
    }

    pub fn input(&self, index: usize) -> Result<&AuthorRowInput, AuthorshipError> {
        self.rows
            .get(index)
            .ok_or(AuthorshipError::RowNotFound { index })
    }

    pub fn input_mut(&mut self, index: usize) -> Result<&mut AuthorRowInput, AuthorshipError> {
        self.rows
            .get_mut(index)
            .ok_or(AuthorshipError::RowNotFound { index })
    }

    /// Appends an empty co-author row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(AuthorRowInput::co_author(self.min_query_len));
        self.rows.len() - 1
    }

    /// Removes a co-author row. The first author cannot be removed.
    pub fn remove_row(&mut self, index: usize) -> Result<LinkedAuthorRow, AuthorshipError> {
        if index == 0 {
            return Err(AuthorshipError::RowNotRemovable { index });
        }
        if index >= self.rows.len() {
            return Err(AuthorshipError::RowNotFound { index });
        }
        Ok(self.rows.remove(index).into_row())
    }

    /// Drops every row and starts over with an empty first-author row.
    pub fn reset(&mut self) {
        self.rows = vec![AuthorRowInput::first_author(self.min_query_len)];
    }

    /// Sets the corresponding flag of a row under the roster's policy and
    /// returns the effective value.
    pub fn set_corresponding(&mut self, index: usize, requested: bool) -> Result<bool, AuthorshipError> {
        let policy = self.policy;
        let input = self.input_mut(index)?;
        if requested && !input.row().is_first() && policy == CorrespondingPolicy::Exclusive {
            debug!(index, "corresponding author is exclusive to the first author");
            return Ok(input.set_corresponding(false));
        }
        Ok(input.set_corresponding(requested))
    }

    pub fn corresponding_count(&self) -> usize {
        self.rows.iter().filter(|r| r.row().is_corresponding()).count()
    }

    /// Rows in the shape sent to the backend.
    pub fn entries(&self) -> Vec<AuthorEntry> {
        self.rows.iter().map(AuthorRowInput::to_entry).collect()
    }
}

impl Default for AuthorRoster {
    fn default() -> Self {
        Self::new(CorrespondingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::authorship::{AuthorInfo, InstitutionOption};
    use crate::domain::foundation::{AuthorId, InstitutionId};

    fn author(id: i64) -> AuthorInfo {
        AuthorInfo::new(AuthorId::from_number(id), format!("Author {id}"))
    }

    #[test]
    fn new_roster_has_corresponding_first_author() {
        let roster = AuthorRoster::default();
        assert_eq!(roster.len(), 1);
        assert!(roster.first_author().is_first());
        assert!(roster.entries()[0].is_corresponding);
    }

    #[test]
    fn first_row_cannot_be_removed() {
        let mut roster = AuthorRoster::default();
        assert_eq!(roster.remove_row(0), Err(AuthorshipError::RowNotRemovable { index: 0 }));
        assert_eq!(roster.remove_row(3), Err(AuthorshipError::RowNotFound { index: 3 }));
    }

    #[test]
    fn rows_are_independent() {
        let mut roster = AuthorRoster::default();
        let second = roster.add_row();
        let third = roster.add_row();
        roster.input_mut(second).unwrap().select_author(author(2)).unwrap();
        roster
            .input_mut(second)
            .unwrap()
            .select_institution(InstitutionOption::new(InstitutionId::from_number(5), "I"))
            .unwrap();
        roster.input_mut(third).unwrap().select_author(author(3)).unwrap();

        let entries = roster.entries();
        assert_eq!(entries[1].institution_id, Some(InstitutionId::from_number(5)));
        assert_eq!(entries[2].institution_id, None);

        roster.remove_row(second).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.entries()[1].author_id, Some(AuthorId::from_number(3)));
    }

    #[test]
    fn multiple_corresponding_allowed_by_default() {
        let mut roster = AuthorRoster::default();
        let i = roster.add_row();
        let j = roster.add_row();
        assert_eq!(roster.set_corresponding(i, true), Ok(true));
        assert_eq!(roster.set_corresponding(j, true), Ok(true));
        assert_eq!(roster.corresponding_count(), 3);
        assert_eq!(roster.set_corresponding(0, false), Ok(true));
    }

    #[test]
    fn exclusive_policy_keeps_first_author_sole_corresponding() {
        let mut roster = AuthorRoster::new(CorrespondingPolicy::Exclusive);
        let i = roster.add_row();
        assert_eq!(roster.set_corresponding(i, true), Ok(false));
        assert_eq!(roster.corresponding_count(), 1);
    }

    #[test]
    fn exclusive_policy_applies_to_saved_entries() {
        let entries = vec![
            AuthorEntry { is_corresponding: false, ..AuthorEntry::empty() },
            AuthorEntry { is_corresponding: true, ..AuthorEntry::empty() },
        ];
        let roster = AuthorRoster::from_entries(&entries, CorrespondingPolicy::Exclusive);
        assert_eq!(roster.corresponding_count(), 1);
        assert!(roster.first_author().is_corresponding());

        let roster = AuthorRoster::from_entries(&entries, CorrespondingPolicy::AllowMultiple);
        assert_eq!(roster.corresponding_count(), 2);
    }

    #[test]
    fn reset_returns_to_single_empty_row() {
        let mut roster = AuthorRoster::default();
        roster.first_input_mut().bind_profile(&author(1));
        roster.add_row();
        roster.reset();
        assert_eq!(roster.len(), 1);
        assert!(roster.first_author().author().is_none());
        assert!(!roster.first_author().is_profile_bound());
    }

    #[test]
    fn unknown_row_index_is_reported() {
        let mut roster = AuthorRoster::default();
        assert_eq!(roster.set_corresponding(4, true), Err(AuthorshipError::RowNotFound { index: 4 }));
        assert!(roster.row(4).is_err());
    }

    #[test]
    fn rows_follow_configured_search_length() {
        let mut roster = AuthorRoster::default().with_min_query_len(2);
        let i = roster.add_row();
        let input = roster.input_mut(i).unwrap();
        input.type_author("王").unwrap();
        assert_eq!(input.author_search_term(), None);
        input.type_author("王芳").unwrap();
        assert_eq!(input.author_search_term().as_deref(), Some("王芳"));
    }

    #[test]
    fn saved_linked_rows_come_back_locked() {
        let entries = vec![AuthorEntry {
            author_id: Some(AuthorId::from_number(1)),
            author_info: Some(author(1)),
            institution_id: Some(InstitutionId::from_number(2)),
            institution_info: None,
            is_corresponding: true,
        }];
        let roster = AuthorRoster::from_entries(&entries, CorrespondingPolicy::default());
        assert!(roster.input(0).unwrap().author_field().is_locked());
        assert!(!roster.input(0).unwrap().institution_field().is_disabled());
    }

    #[test]
    fn empty_entry_list_builds_fresh_roster() {
        let roster = AuthorRoster::from_entries(&[], CorrespondingPolicy::default());
        assert_eq!(roster, AuthorRoster::default());
    }
}
