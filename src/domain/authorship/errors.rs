//! Errors raised by author row transitions and the author directory.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Illegal edits to an author row or roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorshipError {
    #[error("An author must be selected before choosing an institution")]
    AuthorRequired,

    #[error("The author of this row is locked")]
    AuthorLocked,

    #[error("Author row {index} does not exist")]
    RowNotFound { index: usize },

    #[error("Author row {index} cannot be removed")]
    RowNotRemovable { index: usize },

    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),
}

impl From<AuthorshipError> for DomainError {
    fn from(err: AuthorshipError) -> Self {
        let code = match &err {
            AuthorshipError::AuthorRequired => ErrorCode::AuthorRequired,
            AuthorshipError::AuthorLocked => ErrorCode::AuthorLocked,
            AuthorshipError::RowNotFound { .. } => ErrorCode::RowNotFound,
            AuthorshipError::RowNotRemovable { .. } => ErrorCode::RowNotRemovable,
            AuthorshipError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Failures talking to the author directory backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Author directory unavailable: {0}")]
    Unavailable(String),

    #[error("Not authorized to query the author directory")]
    Unauthorized,

    #[error("Malformed directory response: {0}")]
    Malformed(String),
}

impl From<DirectoryError> for DomainError {
    fn from(err: DirectoryError) -> Self {
        let code = match &err {
            DirectoryError::Unavailable(_) => ErrorCode::DirectoryUnavailable,
            DirectoryError::Unauthorized => ErrorCode::Unauthorized,
            DirectoryError::Malformed(_) => ErrorCode::MalformedPayload,
        };
        DomainError::new(code, err.to_string())
    }
}
