//! Authorship module - author rows of a paper submission.
//!
//! - `entry` - wire shapes of authors, institutions and author rows
//! - `linkage` - the per-row author ⇄ institution state machine
//! - `search` - author and institution picker state
//! - `row_input` - a row wired to its two pickers
//! - `roster` - the ordered rows of one paper, first author included
//! - `errors` - illegal edits and directory failures

mod entry;
mod errors;
mod linkage;
mod roster;
mod row_input;
mod search;

pub use entry::{AuthorEntry, AuthorInfo, InstitutionOption};
pub use errors::{AuthorshipError, DirectoryError};
pub use linkage::{LinkPhase, LinkedAuthorRow, Linkage};
pub use roster::{AuthorRoster, CorrespondingPolicy};
pub use row_input::AuthorRowInput;
pub use search::{
    AuthorSearchField, FieldChange, InstitutionSearchField, NO_AUTHOR_MATCH_HINT,
    NO_INSTITUTION_HINT, SELECT_AUTHOR_FIRST_HINT,
};
