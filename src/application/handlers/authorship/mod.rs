//! Authorship handlers.

mod bind_first_author;

pub use bind_first_author::{BindFirstAuthorHandler, BindOutcome};
