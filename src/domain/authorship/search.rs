//! Search field state for the author and institution pickers.
//!
//! Both fields follow the same pattern: free text drives a backend query,
//! results come back asynchronously and are shown as suggestions, and picking
//! one becomes the selection. Results are tagged with the term or author they
//! were fetched for; results for anything other than the field's current
//! term or scope are stale and dropped.

use tracing::debug;

use super::{AuthorInfo, AuthorshipError, InstitutionOption};
use crate::domain::foundation::AuthorId;

pub const NO_AUTHOR_MATCH_HINT: &str = "未找到匹配的作者";
pub const NO_INSTITUTION_HINT: &str = "该作者暂无关联机构";
pub const SELECT_AUTHOR_FIRST_HINT: &str = "请先选择作者";

const LOCKED_SUFFIX: &str = " (已锁定)";

/// What a keystroke did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    /// The field is locked or disabled; input was dropped.
    Ignored,
    /// The search text changed.
    Typed,
    /// The search text changed and the previous selection was dropped.
    SelectionCleared,
}

/// Author picker: debounced free-text search over the author directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorSearchField {
    input: String,
    selected: Option<AuthorInfo>,
    locked: bool,
    min_query_len: usize,
    suggestions: Vec<AuthorInfo>,
    results_term: Option<String>,
}

impl AuthorSearchField {
    pub fn new(min_query_len: usize) -> Self {
        Self {
            min_query_len: min_query_len.max(1),
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, author: AuthorInfo) -> Self {
        self.selected = Some(author);
        self
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        if locked {
            self.input.clear();
            self.suggestions.clear();
            self.results_term = None;
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_min_query_len(&mut self, min_query_len: usize) {
        self.min_query_len = min_query_len.max(1);
    }

    /// Mirrors an externally decided selection, dropping typed text and
    /// results when it changes.
    pub(super) fn sync_selection(&mut self, author: Option<&AuthorInfo>) {
        if self.selected.as_ref() == author {
            return;
        }
        self.selected = author.cloned();
        self.input.clear();
        self.suggestions.clear();
        self.results_term = None;
    }

    pub fn selected(&self) -> Option<&AuthorInfo> {
        self.selected.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text rendered in the input box.
    pub fn display_value(&self) -> String {
        match &self.selected {
            Some(author) if self.locked => format!("{}{}", author.display_value(), LOCKED_SUFFIX),
            Some(author) => author.display_value(),
            None => self.input.clone(),
        }
    }

    /// Applies typed text. Editing the text of a selection, or emptying it,
    /// drops the selection.
    pub fn type_text(&mut self, text: &str) -> FieldChange {
        if self.locked {
            return FieldChange::Ignored;
        }
        let cleared = match &self.selected {
            Some(_) if text.is_empty() || text != self.display_value() => {
                self.selected = None;
                true
            }
            _ => false,
        };
        self.input = text.to_string();
        if cleared {
            FieldChange::SelectionCleared
        } else {
            FieldChange::Typed
        }
    }

    /// The term to query for, if the text is long enough to search.
    pub fn search_term(&self) -> Option<String> {
        if self.locked || self.selected.is_some() {
            return None;
        }
        let term = self.input.trim();
        (term.chars().count() >= self.min_query_len).then(|| term.to_string())
    }

    /// Stores results fetched for `term`. Returns false for stale results.
    pub fn apply_results(&mut self, term: &str, results: Vec<AuthorInfo>) -> bool {
        if self.search_term().as_deref() != Some(term) {
            debug!(term, "dropping stale author search results");
            return false;
        }
        self.suggestions = results;
        self.results_term = Some(term.to_string());
        true
    }

    pub fn suggestions(&self) -> &[AuthorInfo] {
        if self.show_suggestions() {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn show_suggestions(&self) -> bool {
        self.has_current_results() && !self.suggestions.is_empty()
    }

    /// Inline hint, shown when the latest search found nothing.
    pub fn hint(&self) -> Option<&'static str> {
        (self.has_current_results() && self.suggestions.is_empty()).then_some(NO_AUTHOR_MATCH_HINT)
    }

    /// Picks an author.
    pub fn select(&mut self, author: AuthorInfo) -> Result<(), AuthorshipError> {
        if self.locked {
            return Err(AuthorshipError::AuthorLocked);
        }
        self.selected = Some(author);
        self.input.clear();
        self.suggestions.clear();
        self.results_term = None;
        Ok(())
    }

    /// Clears selection and text. Returns false when locked.
    pub fn clear(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.selected = None;
        self.input.clear();
        self.suggestions.clear();
        self.results_term = None;
        true
    }

    fn has_current_results(&self) -> bool {
        !self.locked
            && self.results_term.is_some()
            && self.results_term == self.search_term()
    }
}

/// Institution picker: options are the known institutions of one author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionSearchField {
    author_scope: Option<AuthorId>,
    input: String,
    selected: Option<InstitutionOption>,
    options: Vec<InstitutionOption>,
    loaded_for: Option<AuthorId>,
}

impl InstitutionSearchField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author_scope(&self) -> Option<&AuthorId> {
        self.author_scope.as_ref()
    }

    /// Rescopes the field. Changing the author drops options and selection.
    pub fn set_author_scope(&mut self, author: Option<AuthorId>) {
        if self.author_scope == author {
            return;
        }
        self.author_scope = author;
        self.input.clear();
        self.selected = None;
        self.options.clear();
        self.loaded_for = None;
    }

    pub fn is_disabled(&self) -> bool {
        self.author_scope.is_none()
    }

    pub(super) fn sync_selection(&mut self, institution: Option<&InstitutionOption>) {
        if self.selected.as_ref() == institution {
            return;
        }
        self.selected = institution.cloned();
        self.input.clear();
    }

    pub fn selected(&self) -> Option<&InstitutionOption> {
        self.selected.as_ref()
    }

    pub fn display_value(&self) -> String {
        match &self.selected {
            Some(inst) => inst.name.clone(),
            None => self.input.clone(),
        }
    }

    /// Stores the institutions loaded for `author`. Returns false when the
    /// field has since been rescoped.
    pub fn apply_options(&mut self, author: &AuthorId, options: Vec<InstitutionOption>) -> bool {
        if self.author_scope.as_ref() != Some(author) {
            debug!(author_id = %author, "dropping stale institution options");
            return false;
        }
        self.options = options;
        self.loaded_for = Some(author.clone());
        true
    }

    pub fn type_text(&mut self, text: &str) -> FieldChange {
        if self.is_disabled() {
            return FieldChange::Ignored;
        }
        let cleared = match &self.selected {
            Some(_) if text.is_empty() || text != self.display_value() => {
                self.selected = None;
                true
            }
            _ => false,
        };
        self.input = text.to_string();
        if cleared {
            FieldChange::SelectionCleared
        } else {
            FieldChange::Typed
        }
    }

    /// Loaded options whose name contains the typed text.
    pub fn visible_options(&self) -> Vec<&InstitutionOption> {
        if self.is_disabled() || self.selected.is_some() {
            return Vec::new();
        }
        let needle = self.input.trim().to_lowercase();
        self.options
            .iter()
            .filter(|inst| needle.is_empty() || inst.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn select(&mut self, institution: InstitutionOption) -> Result<(), AuthorshipError> {
        if self.is_disabled() {
            return Err(AuthorshipError::AuthorRequired);
        }
        self.selected = Some(institution);
        self.input.clear();
        Ok(())
    }

    /// Clears selection and text. Returns false when disabled.
    pub fn clear(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.selected = None;
        self.input.clear();
        true
    }

    pub fn hint(&self) -> Option<&'static str> {
        if self.is_disabled() {
            return Some(SELECT_AUTHOR_FIRST_HINT);
        }
        let loaded = self.loaded_for.is_some() && self.loaded_for == self.author_scope;
        (loaded && self.options.is_empty()).then_some(NO_INSTITUTION_HINT)
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
    fn display_value_shows_name_id_and_lock() {
        let mut field = AuthorSearchField::new(1).with_selection(author(3, "王芳"));
        assert_eq!(field.display_value(), "王芳 / ID: 3");
        field.set_locked(true);
        assert_eq!(field.display_value(), "王芳 / ID: 3 (已锁定)");
    }

    #[test]
    fn editing_selected_text_clears_selection() {
        let mut field = AuthorSearchField::new(1).with_selection(author(3, "王芳"));
        assert_eq!(field.type_text("王芳 / ID: "), FieldChange::SelectionCleared);
        assert!(field.selected().is_none());
        assert_eq!(field.type_text("王"), FieldChange::Typed);
    }

    #[test]
    fn emptying_selected_text_clears_selection() {
        let mut field = AuthorSearchField::new(1).with_selection(author(3, "王芳"));
        assert_eq!(field.type_text(""), FieldChange::SelectionCleared);
        assert!(field.selected().is_none());
    }

    #[test]
    fn locked_field_ignores_input_and_clear() {
        let mut field = AuthorSearchField::new(1).with_selection(author(3, "王芳"));
        field.set_locked(true);
        assert_eq!(field.type_text("x"), FieldChange::Ignored);
        assert!(!field.clear());
        assert_eq!(field.select(author(4, "B")), Err(AuthorshipError::AuthorLocked));
        assert_eq!(field.selected().unwrap().name, "王芳");
    }

    #[test]
    fn search_term_respects_min_length() {
        let mut field = AuthorSearchField::new(2);
        field.type_text(" a ");
        assert_eq!(field.search_term(), None);
        field.type_text("ab");
        assert_eq!(field.search_term().as_deref(), Some("ab"));
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut field = AuthorSearchField::new(1);
        field.type_text("li");
        field.type_text("liu");
        assert!(!field.apply_results("li", vec![author(1, "Li")]));
        assert!(field.suggestions().is_empty());
        assert!(field.apply_results("liu", vec![author(2, "Liu")]));
        assert_eq!(field.suggestions().len(), 1);
        assert!(field.show_suggestions());
    }

    #[test]
    fn empty_results_show_no_match_hint() {
        let mut field = AuthorSearchField::new(1);
        field.type_text("zzz");
        assert_eq!(field.hint(), None);
        field.apply_results("zzz", Vec::new());
        assert_eq!(field.hint(), Some(NO_AUTHOR_MATCH_HINT));
        field.type_text("zzzz");
        assert_eq!(field.hint(), None);
    }

    #[test]
    fn selecting_resets_search_state() {
        let mut field = AuthorSearchField::new(1);
        field.type_text("liu");
        field.apply_results("liu", vec![author(2, "Liu")]);
        field.select(author(2, "Liu")).unwrap();
        assert_eq!(field.input(), "");
        assert!(!field.show_suggestions());
        assert_eq!(field.search_term(), None);
    }

    #[test]
    fn institution_field_is_disabled_without_author() {
        let mut field = InstitutionSearchField::new();
        assert!(field.is_disabled());
        assert_eq!(field.hint(), Some(SELECT_AUTHOR_FIRST_HINT));
        assert_eq!(field.type_text("x"), FieldChange::Ignored);
        assert_eq!(field.select(institution(1, "I")), Err(AuthorshipError::AuthorRequired));
    }

    #[test]
    fn institution_options_are_scoped_to_author() {
        let a = AuthorId::from_number(1);
        let b = AuthorId::from_number(2);
        let mut field = InstitutionSearchField::new();
        field.set_author_scope(Some(a.clone()));
        assert!(!field.apply_options(&b, vec![institution(9, "Wrong")]));
        assert!(field.apply_options(&a, vec![institution(1, "北京大学"), institution(2, "复旦大学")]));
        assert_eq!(field.visible_options().len(), 2);

        field.type_text("北京");
        let visible = field.visible_options();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "北京大学");
    }

    #[test]
    fn rescoping_drops_selection() {
        let a = AuthorId::from_number(1);
        let mut field = InstitutionSearchField::new();
        field.set_author_scope(Some(a.clone()));
        field.apply_options(&a, vec![institution(1, "I")]);
        field.select(institution(1, "I")).unwrap();
        assert_eq!(field.display_value(), "I");

        field.set_author_scope(Some(a.clone()));
        assert!(field.selected().is_some());

        field.set_author_scope(Some(AuthorId::from_number(2)));
        assert!(field.selected().is_none());
        assert!(field.visible_options().is_empty());
    }

    #[test]
    fn author_without_institutions_gets_hint() {
        let a = AuthorId::from_number(1);
        let mut field = InstitutionSearchField::new();
        field.set_author_scope(Some(a.clone()));
        assert_eq!(field.hint(), None);
        field.apply_options(&a, Vec::new());
        assert_eq!(field.hint(), Some(NO_INSTITUTION_HINT));
    }
}
