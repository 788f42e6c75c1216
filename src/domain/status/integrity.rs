//! IntegrityStatus - editorial check of submission completeness.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{build_aliases, StatusVocabulary};
use crate::domain::foundation::BadgeColor;

/// Canonical integrity status. The backend spells the verdicts `True`/`False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrityStatus {
    Waiting,
    Passed,
    Failed,
    #[default]
    Unknown,
}

static ALIASES: Lazy<HashMap<String, IntegrityStatus>> = Lazy::new(|| {
    use IntegrityStatus::*;
    build_aliases(&[
        ("pending", Waiting),
        ("true", Passed),
        ("passed", Passed),
        ("complete", Passed),
        ("1", Passed),
        ("false", Failed),
        ("failed", Failed),
        ("incomplete", Failed),
        ("0", Failed),
    ])
});

impl IntegrityStatus {
    /// Returns true while the editor has not yet ruled on completeness.
    pub fn is_waiting(&self) -> bool {
        matches!(self, IntegrityStatus::Waiting)
    }

    /// Status resulting from the editor's completeness checkbox.
    pub fn from_check(is_complete: bool) -> Self {
        if is_complete {
            IntegrityStatus::Passed
        } else {
            IntegrityStatus::Failed
        }
    }
}

impl StatusVocabulary for IntegrityStatus {
    const FALLBACK: Self = IntegrityStatus::Unknown;
    const ALL_LABEL: &'static str = "全部";

    fn all() -> &'static [Self] {
        use IntegrityStatus::*;
        &[Waiting, Passed, Failed, Unknown]
    }

    fn filterable() -> &'static [Self] {
        use IntegrityStatus::*;
        &[Waiting, Passed, Failed]
    }

    fn aliases() -> &'static HashMap<String, Self> {
        &ALIASES
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            IntegrityStatus::Waiting => "Waiting",
            IntegrityStatus::Passed => "True",
            IntegrityStatus::Failed => "False",
            IntegrityStatus::Unknown => "Unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IntegrityStatus::Waiting => "待审核",
            IntegrityStatus::Passed => "审核通过",
            IntegrityStatus::Failed => "审核未通过",
            IntegrityStatus::Unknown => "未知状态",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            IntegrityStatus::Waiting => BadgeColor::Yellow,
            IntegrityStatus::Passed => BadgeColor::Green,
            IntegrityStatus::Failed => BadgeColor::Red,
            IntegrityStatus::Unknown => BadgeColor::Gray,
        }
    }
}

super::impl_status_serde!(IntegrityStatus);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backend_spellings_normalize() {
        assert_eq!(IntegrityStatus::normalize(Some("Waiting")), IntegrityStatus::Waiting);
        assert_eq!(IntegrityStatus::normalize(Some("True")), IntegrityStatus::Passed);
        assert_eq!(IntegrityStatus::normalize(Some("false")), IntegrityStatus::Failed);
        assert_eq!(IntegrityStatus::normalize(Some("??")), IntegrityStatus::Unknown);
    }

    #[test]
    fn boolean_json_values_normalize() {
        assert_eq!(IntegrityStatus::normalize_value(&json!(true)), IntegrityStatus::Passed);
        assert_eq!(IntegrityStatus::normalize_value(&json!(0)), IntegrityStatus::Failed);
        assert_eq!(IntegrityStatus::normalize_value(&json!(null)), IntegrityStatus::Unknown);
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(IntegrityStatus::label_for(Some("Waiting")), "待审核");
        assert_eq!(IntegrityStatus::label_for(None), "未知状态");
        assert_eq!(IntegrityStatus::color_for(Some("True")), BadgeColor::Green);
        assert_eq!(IntegrityStatus::color_for(Some("nope")), BadgeColor::Gray);
    }

    #[test]
    fn waiting_and_checkbox_helpers() {
        assert!(IntegrityStatus::normalize(Some("pending")).is_waiting());
        assert!(!IntegrityStatus::Passed.is_waiting());
        assert_eq!(IntegrityStatus::from_check(true), IntegrityStatus::Passed);
        assert_eq!(IntegrityStatus::from_check(false), IntegrityStatus::Failed);
    }

    #[test]
    fn canonical_names_round_trip() {
        for status in IntegrityStatus::all() {
            assert_eq!(IntegrityStatus::normalize(Some(status.canonical_name())), *status);
        }
    }
}
