//! Submission module - the paper form: keywords, fields, attachment.

mod draft;
mod keywords;

pub use draft::{
    AttachmentMeta, FormErrors, FormMode, PaperDraft, SubmissionLimits, ACCEPTED_FILE_TYPES,
    DEFAULT_MAX_ATTACHMENT_BYTES, DEFAULT_MAX_KEYWORDS,
};
pub use keywords::{normalize_keyword_value, normalize_keywords, sanitize_keywords, KeywordEntry};
