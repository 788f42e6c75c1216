//! PaymentStatus - publication fee state of a paper.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{build_aliases, StatusVocabulary};
use crate::domain::foundation::BadgeColor;

/// Canonical payment status. Anything not recognisably paid is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

static ALIASES: Lazy<HashMap<String, PaymentStatus>> = Lazy::new(|| {
    use PaymentStatus::*;
    build_aliases(&[("completed", Paid), ("unpaid", Pending), ("waiting", Pending)])
});

impl PaymentStatus {
    /// The status an editor toggles to from this one.
    pub fn toggled(&self) -> Self {
        match self {
            PaymentStatus::Paid => PaymentStatus::Pending,
            PaymentStatus::Pending => PaymentStatus::Paid,
        }
    }
}

impl StatusVocabulary for PaymentStatus {
    const FALLBACK: Self = PaymentStatus::Pending;
    const ALL_LABEL: &'static str = "全部";

    fn all() -> &'static [Self] {
        &[PaymentStatus::Paid, PaymentStatus::Pending]
    }

    fn filterable() -> &'static [Self] {
        Self::all()
    }

    fn aliases() -> &'static HashMap<String, Self> {
        &ALIASES
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "已支付",
            PaymentStatus::Pending => "待支付",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            PaymentStatus::Paid => BadgeColor::Green,
            PaymentStatus::Pending => BadgeColor::Orange,
        }
    }
}

super::impl_status_serde!(PaymentStatus);
