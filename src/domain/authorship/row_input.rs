//! AuthorRowInput - one author row together with its two pickers.
//!
//! The row's [`LinkPhase`] decides what each picker may do: the author
//! picker is locked while the row is profile-bound or linked to an
//! institution, and the institution picker is scoped to the row's author
//! (disabled without one). Every edit goes through the row first and the
//! pickers are resynchronised afterwards, so they never disagree with it.

use super::{
    AuthorEntry, AuthorInfo, AuthorSearchField, AuthorshipError, FieldChange, InstitutionOption,
    InstitutionSearchField, LinkPhase, LinkedAuthorRow,
};
use crate::domain::foundation::AuthorId;

/// An author row with its author and institution pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRowInput {
    row: LinkedAuthorRow,
    author_field: AuthorSearchField,
    institution_field: InstitutionSearchField,
}

impl AuthorRowInput {
    /// Wraps a row, deriving picker state from it.
    pub fn new(row: LinkedAuthorRow, min_query_len: usize) -> Self {
        let mut input = Self {
            row,
            author_field: AuthorSearchField::new(min_query_len),
            institution_field: InstitutionSearchField::new(),
        };
        input.sync();
        input
    }

    pub fn first_author(min_query_len: usize) -> Self {
        Self::new(LinkedAuthorRow::first_author(), min_query_len)
    }

    pub fn co_author(min_query_len: usize) -> Self {
        Self::new(LinkedAuthorRow::new(), min_query_len)
    }

    pub fn row(&self) -> &LinkedAuthorRow {
        &self.row
    }

    pub fn into_row(self) -> LinkedAuthorRow {
        self.row
    }

    pub fn author_field(&self) -> &AuthorSearchField {
        &self.author_field
    }

    pub fn institution_field(&self) -> &InstitutionSearchField {
        &self.institution_field
    }

    pub fn set_min_query_len(&mut self, min_query_len: usize) {
        self.author_field.set_min_query_len(min_query_len);
    }

    /// Text typed into the author picker. Dropping the selected author
    /// unscopes the institution picker.
    pub fn type_author(&mut self, text: &str) -> Result<FieldChange, AuthorshipError> {
        let change = self.author_field.type_text(text);
        if change == FieldChange::SelectionCleared {
            self.row.clear_author()?;
        }
        self.sync();
        Ok(change)
    }

    /// The term the author picker wants searched, if any.
    pub fn author_search_term(&self) -> Option<String> {
        self.author_field.search_term()
    }

    /// Stores author search results. Returns false for stale results.
    pub fn apply_author_results(&mut self, term: &str, results: Vec<AuthorInfo>) -> bool {
        self.author_field.apply_results(term, results)
    }

    /// Picks an author. Refused while the author picker is locked.
    pub fn select_author(&mut self, author: AuthorInfo) -> Result<LinkPhase, AuthorshipError> {
        if self.row.author_locked() {
            return Err(AuthorshipError::AuthorLocked);
        }
        let phase = self.row.select_author(author)?;
        self.sync();
        Ok(phase)
    }

    pub fn clear_author(&mut self) -> Result<LinkPhase, AuthorshipError> {
        let phase = self.row.clear_author()?;
        self.sync();
        Ok(phase)
    }

    /// Author the institution options should be loaded for.
    pub fn institution_scope(&self) -> Option<&AuthorId> {
        self.institution_field.author_scope()
    }

    /// Stores institutions loaded for `author`. Returns false when the row
    /// has moved on to another author.
    pub fn apply_institution_options(
        &mut self,
        author: &AuthorId,
        options: Vec<InstitutionOption>,
    ) -> bool {
        self.institution_field.apply_options(author, options)
    }

    /// Text typed into the institution picker. Dropping the selected
    /// institution unlocks the author picker.
    pub fn type_institution(&mut self, text: &str) -> FieldChange {
        let change = self.institution_field.type_text(text);
        if change == FieldChange::SelectionCleared {
            self.row.clear_institution();
        }
        self.sync();
        change
    }

    pub fn select_institution(
        &mut self,
        institution: InstitutionOption,
    ) -> Result<LinkPhase, AuthorshipError> {
        let phase = self.row.select_institution(institution)?;
        self.sync();
        Ok(phase)
    }

    pub fn clear_institution(&mut self) -> LinkPhase {
        let phase = self.row.clear_institution();
        self.sync();
        phase
    }

    /// Binds the row to the signed-in user's profile and locks the author
    /// picker. Only the first row binds.
    pub fn bind_profile(&mut self, profile: &AuthorInfo) -> bool {
        let bound = self.row.bind_profile(profile);
        self.sync();
        bound
    }

    pub fn set_corresponding(&mut self, requested: bool) -> bool {
        self.row.set_corresponding(requested)
    }

    pub fn status_hint(&self) -> Option<String> {
        self.row.status_hint()
    }

    pub fn to_entry(&self) -> AuthorEntry {
        self.row.to_entry()
    }

    fn sync(&mut self) {
        self.author_field.set_locked(false);
        self.author_field.sync_selection(self.row.author());
        self.author_field.set_locked(self.row.author_locked());

        let scope = self.row.author().map(|a| a.author_id.clone());
        self.institution_field.set_author_scope(scope);
        self.institution_field.sync_selection(self.row.institution());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::InstitutionId;

    fn author(id: i64, name: &str) -> AuthorInfo {
        AuthorInfo::new(AuthorId::from_number(id), name)
    }

    fn institution(id: i64, name: &str) -> InstitutionOption {
        InstitutionOption::new(InstitutionId::from_number(id), name)
    }

    #[test]
    fn new_row_has_open_author_and_disabled_institution() {
        let input = AuthorRowInput::co_author(1);
        assert!(!input.author_field().is_locked());
        assert!(input.institution_field().is_disabled());
        assert_eq!(input.institution_scope(), None);
    }

    #[test]
    fn linked_row_locks_author_picker() {
        let mut input = AuthorRowInput::co_author(1);
        input.select_author(author(1, "王芳")).unwrap();
        input.select_institution(institution(9, "清华大学")).unwrap();

        assert!(input.row().author_locked());
        assert!(input.author_field().is_locked());
        assert_eq!(input.type_author("x"), Ok(FieldChange::Ignored));
        assert_eq!(input.author_field().selected(), Some(&author(1, "王芳")));
        assert_eq!(input.select_author(author(2, "李华")), Err(AuthorshipError::AuthorLocked));
        assert_eq!(input.row().phase(), LinkPhase::Linked);
    }

    #[test]
    fn clearing_institution_unlocks_author_picker() {
        let mut input = AuthorRowInput::co_author(1);
        input.select_author(author(1, "王芳")).unwrap();
        input.select_institution(institution(9, "清华大学")).unwrap();

        assert_eq!(input.type_institution(""), FieldChange::SelectionCleared);
        assert_eq!(input.row().phase(), LinkPhase::AuthorSelected);
        assert!(!input.author_field().is_locked());

        input.select_author(author(2, "李华")).unwrap();
        assert_eq!(input.to_entry().author_id, Some(AuthorId::from_number(2)));
        assert_eq!(input.to_entry().institution_id, None);
    }

    #[test]
    fn institution_picker_follows_selected_author() {
        let mut input = AuthorRowInput::co_author(1);
        input.select_author(author(1, "王芳")).unwrap();
        assert_eq!(input.institution_scope(), Some(&AuthorId::from_number(1)));
        assert!(input.apply_institution_options(&AuthorId::from_number(1), vec![institution(9, "清华")]));

        input.select_author(author(2, "李华")).unwrap();
        assert_eq!(input.institution_scope(), Some(&AuthorId::from_number(2)));
        assert!(input.institution_field().visible_options().is_empty());
        assert!(!input.apply_institution_options(&AuthorId::from_number(1), vec![institution(9, "清华")]));
    }

    #[test]
    fn editing_author_text_clears_row_author() {
        let mut input = AuthorRowInput::co_author(1);
        input.select_author(author(1, "王芳")).unwrap();

        assert_eq!(input.type_author("王"), Ok(FieldChange::SelectionCleared));
        assert_eq!(input.row().phase(), LinkPhase::NoAuthor);
        assert!(input.institution_field().is_disabled());
        assert_eq!(input.author_search_term().as_deref(), Some("王"));
    }

    #[test]
    fn institution_picker_refuses_input_without_author() {
        let mut input = AuthorRowInput::co_author(1);
        assert_eq!(input.type_institution("清华"), FieldChange::Ignored);
        assert_eq!(
            input.select_institution(institution(9, "清华大学")),
            Err(AuthorshipError::AuthorRequired)
        );
    }

    #[test]
    fn profile_binding_locks_first_author_picker() {
        let mut input = AuthorRowInput::first_author(1);
        assert!(input.bind_profile(&author(7, "王小明")));

        assert!(input.author_field().is_locked());
        assert_eq!(input.author_field().display_value(), "王小明 / ID: 7 (已锁定)");
        assert_eq!(input.type_author(""), Ok(FieldChange::Ignored));
        assert_eq!(input.clear_author(), Err(AuthorshipError::AuthorLocked));

        input.select_institution(institution(9, "清华大学")).unwrap();
        input.clear_institution();
        assert!(input.author_field().is_locked());
    }

    #[test]
    fn wrapping_a_saved_row_restores_picker_state() {
        let entry = AuthorEntry {
            author_id: Some(AuthorId::from_number(3)),
            author_info: Some(author(3, "Li Na")),
            institution_id: Some(InstitutionId::from_number(4)),
            institution_info: Some(institution(4, "北京大学")),
            is_corresponding: true,
        };
        let input = AuthorRowInput::new(LinkedAuthorRow::from_entry(&entry, false), 1);

        assert!(input.author_field().is_locked());
        assert_eq!(input.institution_field().selected(), Some(&institution(4, "北京大学")));
        assert_eq!(input.institution_field().display_value(), "北京大学");
    }
}
