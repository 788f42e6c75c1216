//! WithdrawalStatus - reviewer fee withdrawal state.
//!
//! The backend reports withdrawals either as words (`Approved`, `Rejected`,
//! `Pending`) or as `1`/`0`/`true`/`false` flags depending on the endpoint.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{build_aliases, StatusVocabulary};
use crate::domain::foundation::BadgeColor;

/// Canonical withdrawal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WithdrawalStatus {
    Approved,
    Rejected,
    #[default]
    Pending,
}

static ALIASES: Lazy<HashMap<String, WithdrawalStatus>> = Lazy::new(|| {
    use WithdrawalStatus::*;
    build_aliases(&[
        ("1", Approved),
        ("true", Approved),
        ("withdrawn", Approved),
        ("0", Rejected),
        ("false", Rejected),
        ("processing", Pending),
    ])
});

impl WithdrawalStatus {
    /// Status resulting from the editor's approve/reject decision.
    pub fn from_decision(approved: bool) -> Self {
        if approved {
            WithdrawalStatus::Approved
        } else {
            WithdrawalStatus::Rejected
        }
    }

    /// Returns true if the editor can still act on the request.
    pub fn is_actionable(&self) -> bool {
        matches!(self, WithdrawalStatus::Pending)
    }
}

impl StatusVocabulary for WithdrawalStatus {
    const FALLBACK: Self = WithdrawalStatus::Pending;
    const ALL_LABEL: &'static str = "全部";

    fn all() -> &'static [Self] {
        use WithdrawalStatus::*;
        &[Approved, Rejected, Pending]
    }

    fn filterable() -> &'static [Self] {
        Self::all()
    }

    fn aliases() -> &'static HashMap<String, Self> {
        &ALIASES
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            WithdrawalStatus::Approved => "Approved",
            WithdrawalStatus::Rejected => "Rejected",
            WithdrawalStatus::Pending => "Pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WithdrawalStatus::Approved => "已提现",
            WithdrawalStatus::Rejected => "未提现",
            WithdrawalStatus::Pending => "处理中",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            WithdrawalStatus::Approved => BadgeColor::Green,
            WithdrawalStatus::Rejected => BadgeColor::Red,
            WithdrawalStatus::Pending => BadgeColor::Orange,
        }
    }
}

super::impl_status_serde!(WithdrawalStatus);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_forms_normalize() {
        assert_eq!(WithdrawalStatus::normalize_value(&json!(1)), WithdrawalStatus::Approved);
        assert_eq!(WithdrawalStatus::normalize_value(&json!("1")), WithdrawalStatus::Approved);
        assert_eq!(WithdrawalStatus::normalize_value(&json!(true)), WithdrawalStatus::Approved);
        assert_eq!(WithdrawalStatus::normalize_value(&json!(0)), WithdrawalStatus::Rejected);
        assert_eq!(WithdrawalStatus::normalize_value(&json!(false)), WithdrawalStatus::Rejected);
    }

    #[test]
    fn anything_else_is_pending() {
        assert_eq!(WithdrawalStatus::normalize_value(&json!(null)), WithdrawalStatus::Pending);
        assert_eq!(WithdrawalStatus::normalize(Some("2")), WithdrawalStatus::Pending);
        assert_eq!(WithdrawalStatus::label_for(None), "处理中");
    }

    #[test]
    fn decisions_and_actionability() {
        assert_eq!(WithdrawalStatus::from_decision(true), WithdrawalStatus::Approved);
        assert_eq!(WithdrawalStatus::from_decision(false), WithdrawalStatus::Rejected);
        assert!(WithdrawalStatus::Pending.is_actionable());
        assert!(!WithdrawalStatus::Approved.is_actionable());
    }
}
