//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, display colors, the session context,
//! the state machine trait and error types that form the vocabulary of the
//! submission workflow.

mod color;
mod errors;
mod ids;
mod session;
mod state_machine;
mod timestamp;

pub use color::BadgeColor;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{normalize_id, optional_id, AuthorId, InstitutionId, PaperId, RawId, UserId};
pub use session::{AuthSession, Role, SessionContext};
pub use state_machine::StateMachine;
pub use timestamp::{lenient_timestamp, Timestamp};
