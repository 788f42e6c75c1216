//! Paper submission form configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::authorship::CorrespondingPolicy;
use crate::domain::submission::{SubmissionLimits, DEFAULT_MAX_ATTACHMENT_BYTES, DEFAULT_MAX_KEYWORDS};

/// Submission form configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubmissionConfig {
    /// Keywords allowed per language
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Largest accepted manuscript attachment, in bytes
    #[serde(default = "default_max_attachment_bytes")]
    pub max_attachment_bytes: u64,

    /// Whether co-authors may also be marked corresponding
    #[serde(default)]
    pub corresponding_policy: CorrespondingPolicy,
}

impl SubmissionConfig {
    pub fn limits(&self) -> SubmissionLimits {
        SubmissionLimits {
            max_keywords: self.max_keywords,
            max_attachment_bytes: self.max_attachment_bytes,
        }
    }

    /// Validate submission configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_keywords == 0 {
            return Err(ValidationError::InvalidMaxKeywords);
        }
        if self.max_attachment_bytes == 0 {
            return Err(ValidationError::InvalidAttachmentLimit);
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            max_attachment_bytes: default_max_attachment_bytes(),
            corresponding_policy: CorrespondingPolicy::default(),
        }
    }
}

fn default_max_keywords() -> usize {
    DEFAULT_MAX_KEYWORDS
}

fn default_max_attachment_bytes() -> u64 {
    DEFAULT_MAX_ATTACHMENT_BYTES
}
