//! Tracing setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: degraded backend calls (search falling back to no suggestions)
//! - `info`: handler outcomes such as first-author binding
//! - `debug`: ignored edits and dropped stale results
//!
//! # Usage
//!
//! ```ignore
//! use paper_desk::config::AppConfig;
//! use paper_desk::telemetry::init_tracing;
//!
//! let config = AppConfig::load_validated()?;
//! init_tracing(&config.logging)?;
//! ```

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured filter when set.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    init_tracing_with_writer(config, io::stderr)
}

/// Installs the global subscriber with a custom writer (useful for testing).
pub fn init_tracing_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<(), TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(&config.filter)?;

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(writer))
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer))
            .try_init()?,
    }
    Ok(())
}

fn build_env_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(directive),
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(parse_filter(&LoggingConfig::default().filter).is_ok());
    }

    #[test]
    fn malformed_filter_is_rejected() {
        assert!(parse_filter("paper_desk=[[").is_err());
    }

    #[test]
    fn second_initialization_fails_without_panicking() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };
        let _ = init_tracing_with_writer(&config, io::sink);
        let second = init_tracing_with_writer(&config, io::sink);
        assert!(matches!(second, Err(TelemetryError::AlreadyInitialized(_))));
    }
}
