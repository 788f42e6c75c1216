//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Search debounce must be at most 5000 ms, got {0}")]
    DebounceTooLong(u64),

    #[error("Minimum search query length must be at least 1")]
    InvalidMinQueryLength,

    #[error("Maximum suggestions must be at least 1")]
    InvalidMaxSuggestions,

    #[error("Maximum keyword count must be at least 1")]
    InvalidMaxKeywords,

    #[error("Maximum attachment size must be greater than zero")]
    InvalidAttachmentLimit,

    #[error("Log filter directive cannot be empty")]
    EmptyLogFilter,
}
