//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the author directory
//! and backend list payloads.

pub mod authorship;
pub mod progress;
pub mod search;

pub use authorship::{BindFirstAuthorHandler, BindOutcome};
pub use progress::{IndexProgressHandler, PaperProgressRow};
pub use search::{
    AuthorSuggestions, Debouncer, InstitutionOptions, LoadInstitutionsHandler,
    SearchAuthorsHandler, SearchAuthorsQuery,
};
