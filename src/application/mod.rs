//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Authorship handlers
    BindFirstAuthorHandler, BindOutcome,
    // Progress handlers
    IndexProgressHandler, PaperProgressRow,
    // Search handlers
    AuthorSuggestions, Debouncer, InstitutionOptions, LoadInstitutionsHandler,
    SearchAuthorsHandler, SearchAuthorsQuery,
};
