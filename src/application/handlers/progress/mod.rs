//! Progress handlers.

mod index_progress;

pub use index_progress::{IndexProgressHandler, PaperProgressRow};
