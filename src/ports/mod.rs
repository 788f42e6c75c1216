//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Directory Ports
//!
//! - `AuthorDirectory` - Author search, per-author institutions and the
//!   signed-in user's profile

mod author_directory;

pub use author_directory::{AuthorDirectory, UserProfile};
