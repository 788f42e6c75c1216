//! PaperDraft - the paper form and its submit-time validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::sanitize_keywords;
use crate::domain::authorship::AuthorEntry;

/// MIME types accepted for the manuscript attachment.
pub const ACCEPTED_FILE_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 20 * 1024 * 1024;
pub const DEFAULT_MAX_KEYWORDS: usize = 8;

/// Whether the form creates a paper or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Limits applied when validating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionLimits {
    pub max_keywords: usize,
    pub max_attachment_bytes: u64,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

/// Metadata of the file picked as manuscript attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl AttachmentMeta {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }

    pub fn is_accepted_type(&self) -> bool {
        ACCEPTED_FILE_TYPES.contains(&self.content_type.trim())
    }
}

/// Per-field validation messages, keyed by field path (`authors.0.author_id`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Error)]
#[error("{} form field(s) failed validation", .fields.len())]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages for a field, in the order they were found.
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message of a field, as shown under the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// The paper form as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaperDraft {
    #[serde(default)]
    pub title_zh: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub abstract_zh: String,
    #[serde(default)]
    pub abstract_en: String,
    #[serde(default)]
    pub keywords_zh: Vec<String>,
    #[serde(default)]
    pub keywords_en: Vec<String>,
    #[serde(default)]
    pub fund_name: String,
    #[serde(default)]
    pub fund_code: String,
    #[serde(default)]
    pub authors: Vec<AuthorEntry>,
    #[serde(skip)]
    pub attachment: Option<AttachmentMeta>,
}

impl PaperDraft {
    /// Copy with keyword lists trimmed and de-duplicated.
    pub fn sanitized(mut self) -> Self {
        self.keywords_zh = sanitize_keywords(&self.keywords_zh);
        self.keywords_en = sanitize_keywords(&self.keywords_en);
        self
    }

    pub fn validate_for_create(&self, limits: &SubmissionLimits) -> Result<(), FormErrors> {
        self.validate(FormMode::Create, limits)
    }

    pub fn validate_for_edit(&self, limits: &SubmissionLimits) -> Result<(), FormErrors> {
        self.validate(FormMode::Edit, limits)
    }

    /// Collects every failing field. An attachment is required only when
    /// creating.
    pub fn validate(&self, mode: FormMode, limits: &SubmissionLimits) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        let required = [
            ("title_zh", &self.title_zh, "请输入中文标题"),
            ("title_en", &self.title_en, "请输入英文标题"),
            ("abstract_zh", &self.abstract_zh, "请输入中文摘要"),
            ("abstract_en", &self.abstract_en, "请输入英文摘要"),
            ("fund_name", &self.fund_name, "请输入资助基金名称"),
            ("fund_code", &self.fund_code, "请输入资助编号"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.add(field, message);
            }
        }

        check_keywords(&mut errors, "keywords_zh", &self.keywords_zh, "请输入至少一个中文关键词", limits);
        check_keywords(&mut errors, "keywords_en", &self.keywords_en, "请输入至少一个英文关键词", limits);

        if self.authors.is_empty() {
            errors.add("authors", "至少关联一位作者");
        }
        for (i, author) in self.authors.iter().enumerate() {
            if author.author_id.is_none() {
                errors.add(format!("authors.{i}.author_id"), "请选择作者");
            }
            if author.institution_id.is_none() {
                errors.add(format!("authors.{i}.institution_id"), "请选择单位");
            }
        }

        match (&self.attachment, mode) {
            (None, FormMode::Create) => errors.add("attachment", "请上传稿件附件"),
            (None, FormMode::Edit) => {}
            (Some(file), _) => {
                if !file.is_accepted_type() {
                    errors.add("attachment", "仅支持 PDF 或 Word 文件");
                }
                if file.size_bytes > limits.max_attachment_bytes {
                    errors.add(
                        "attachment",
                        format!("文件大小不能超过 {}MB", limits.max_attachment_bytes / (1024 * 1024)),
                    );
                }
            }
        }

        errors.into_result()
    }
}

fn check_keywords(
    errors: &mut FormErrors,
    field: &str,
    keywords: &[String],
    missing_message: &str,
    limits: &SubmissionLimits,
) {
    let count = keywords.iter().filter(|k| !k.trim().is_empty()).count();
    if count == 0 {
        errors.add(field, missing_message);
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        errors.add(field, "关键词不能为空");
    }
    if keywords.len() > limits.max_keywords {
        errors.add(field, format!("关键词不超过{}个", limits.max_keywords));
    }
}
