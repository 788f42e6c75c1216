//! Author/institution search configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_DEBOUNCE_MS: u64 = 5000;

/// Search widget configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before querying
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Shortest trimmed term that triggers a query
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Suggestions kept from one search response
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Validate search configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ValidationError::DebounceTooLong(self.debounce_ms));
        }
        if self.min_query_len == 0 {
            return Err(ValidationError::InvalidMinQueryLength);
        }
        if self.max_suggestions == 0 {
            return Err(ValidationError::InvalidMaxSuggestions);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_len() -> usize {
    1
}

fn default_max_suggestions() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.min_query_len, 1);
        assert_eq!(config.max_suggestions, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_debounce_bounds() {
        let config = SearchConfig {
            debounce_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = SearchConfig {
            debounce_ms: 5001,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::DebounceTooLong(5001)));
    }

    #[test]
    fn test_validation_zero_lengths() {
        let config = SearchConfig {
            min_query_len: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMinQueryLength));

        let config = SearchConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxSuggestions));
    }
}
