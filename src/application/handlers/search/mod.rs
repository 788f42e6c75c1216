//! Search handlers - author and institution lookups behind the pickers.

mod debouncer;
mod load_institutions;
mod search_authors;

pub use debouncer::Debouncer;
pub use load_institutions::{InstitutionOptions, LoadInstitutionsHandler};
pub use search_authors::{AuthorSuggestions, SearchAuthorsHandler, SearchAuthorsQuery};
