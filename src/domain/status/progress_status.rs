//! ProgressStatus - the pipeline stage string the backend reports for a paper.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{build_aliases, StatusVocabulary};
use crate::domain::foundation::BadgeColor;

/// Canonical paper progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgressStatus {
    Draft,
    InitialReviewing,
    Reviewing,
    Revisioning,
    SecondReviewing,
    FinalReviewCompleted,
    FinalReviewing,
    Paying,
    Scheduling,
    Published,
    Accept,
    Reject,
    #[default]
    Unknown,
}

static ALIASES: Lazy<HashMap<String, ProgressStatus>> = Lazy::new(|| build_aliases(&[]));

/// Label shown when no status text is present at all.
pub const UNKNOWN_PROGRESS_LABEL: &str = "未知状态";

impl ProgressStatus {
    /// Label for raw backend text.
    ///
    /// Unrecognised, non-empty text is shown as-is (trimmed) so that new
    /// backend stages stay readable; empty or missing text shows the unknown
    /// label.
    pub fn display_label(raw: Option<&str>) -> Cow<'static, str> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Cow::Borrowed(UNKNOWN_PROGRESS_LABEL);
        }
        match Self::normalize(Some(trimmed)) {
            ProgressStatus::Unknown if !trimmed.eq_ignore_ascii_case("unknown") => {
                Cow::Owned(trimmed.to_string())
            }
            status => Cow::Borrowed(status.label()),
        }
    }

    /// Returns true once the paper has left the editorial pipeline.
    pub fn is_final(&self) -> bool {
        matches!(self, ProgressStatus::Published | ProgressStatus::Reject)
    }
}

impl StatusVocabulary for ProgressStatus {
    const FALLBACK: Self = ProgressStatus::Unknown;
    const ALL_LABEL: &'static str = "全部状态";

    fn all() -> &'static [Self] {
        use ProgressStatus::*;
        &[
            Draft,
            InitialReviewing,
            Reviewing,
            Revisioning,
            SecondReviewing,
            FinalReviewCompleted,
            FinalReviewing,
            Paying,
            Scheduling,
            Published,
            Accept,
            Reject,
            Unknown,
        ]
    }

    fn filterable() -> &'static [Self] {
        let all = Self::all();
        &all[..all.len() - 1]
    }

    fn aliases() -> &'static HashMap<String, Self> {
        &ALIASES
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            ProgressStatus::Draft => "Draft",
            ProgressStatus::InitialReviewing => "Initial Reviewing",
            ProgressStatus::Reviewing => "Reviewing",
            ProgressStatus::Revisioning => "Revisioning",
            ProgressStatus::SecondReviewing => "Second Reviewing",
            ProgressStatus::FinalReviewCompleted => "Final Review Completed",
            ProgressStatus::FinalReviewing => "Final Reviewing",
            ProgressStatus::Paying => "Paying",
            ProgressStatus::Scheduling => "Scheduling",
            ProgressStatus::Published => "Published",
            ProgressStatus::Accept => "Accept",
            ProgressStatus::Reject => "Reject",
            ProgressStatus::Unknown => "Unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Draft => "草稿",
            ProgressStatus::InitialReviewing => "初审中",
            ProgressStatus::Reviewing => "评审中",
            ProgressStatus::Revisioning => "修改中",
            ProgressStatus::SecondReviewing => "二次评审",
            ProgressStatus::FinalReviewCompleted => "最终评审完成",
            ProgressStatus::FinalReviewing => "最终评审中",
            ProgressStatus::Paying => "支付中",
            ProgressStatus::Scheduling => "排期中",
            ProgressStatus::Published => "已发表",
            ProgressStatus::Accept => "已录用",
            ProgressStatus::Reject => "已拒绝",
            ProgressStatus::Unknown => UNKNOWN_PROGRESS_LABEL,
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            ProgressStatus::Draft | ProgressStatus::Unknown => BadgeColor::Gray,
            ProgressStatus::InitialReviewing
            | ProgressStatus::Reviewing
            | ProgressStatus::SecondReviewing
            | ProgressStatus::FinalReviewing => BadgeColor::Blue,
            ProgressStatus::Revisioning => BadgeColor::Orange,
            ProgressStatus::Paying | ProgressStatus::Scheduling => BadgeColor::Yellow,
            ProgressStatus::FinalReviewCompleted
            | ProgressStatus::Accept
            | ProgressStatus::Published => BadgeColor::Green,
            ProgressStatus::Reject => BadgeColor::Red,
        }
    }
}

super::impl_status_serde!(ProgressStatus);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalizes_spacing_and_separator_variants() {
        assert_eq!(
            ProgressStatus::normalize(Some("initial_reviewing")),
            ProgressStatus::InitialReviewing
        );
        assert_eq!(
            ProgressStatus::normalize(Some("Second-Reviewing")),
            ProgressStatus::SecondReviewing
        );
        assert_eq!(
            ProgressStatus::normalize(Some("  final   review completed ")),
            ProgressStatus::FinalReviewCompleted
        );
        assert_eq!(ProgressStatus::normalize(Some("PUBLISHED")), ProgressStatus::Published);
    }

    #[test]
    fn unknown_input_falls_back() {
        assert_eq!(ProgressStatus::normalize(None), ProgressStatus::Unknown);
        assert_eq!(ProgressStatus::normalize(Some("")), ProgressStatus::Unknown);
        assert_eq!(ProgressStatus::normalize(Some("Archived")), ProgressStatus::Unknown);
    }

    #[test]
    fn display_label_keeps_unrecognised_text() {
        assert_eq!(ProgressStatus::display_label(Some("Reviewing")), "评审中");
        assert_eq!(ProgressStatus::display_label(Some(" Archived ")), "Archived");
        assert_eq!(ProgressStatus::display_label(Some("  ")), "未知状态");
        assert_eq!(ProgressStatus::display_label(None), "未知状态");
        assert_eq!(ProgressStatus::display_label(Some("unknown")), "未知状态");
    }

    #[test]
    fn filterable_excludes_fallback() {
        let filterable = ProgressStatus::filterable();
        assert_eq!(filterable.len(), 12);
        assert!(!filterable.contains(&ProgressStatus::Unknown));
    }

    #[test]
    fn final_states() {
        assert!(ProgressStatus::Published.is_final());
        assert!(ProgressStatus::Reject.is_final());
        assert!(!ProgressStatus::Paying.is_final());
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[A-Za-z _-]{0,30}") {
            let once = ProgressStatus::normalize(Some(&raw));
            prop_assert_eq!(ProgressStatus::normalize(Some(once.canonical_name())), once);
        }
    }
}
