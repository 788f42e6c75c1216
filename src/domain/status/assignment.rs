//! AssignmentStatus - state of a review assignment from the expert's side.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{build_aliases, StatusVocabulary};
use crate::domain::foundation::BadgeColor;

/// Canonical review assignment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssignmentStatus {
    Assigned,
    Overdue,
    Completed,
    #[default]
    Unknown,
}

static ALIASES: Lazy<HashMap<String, AssignmentStatus>> = Lazy::new(|| {
    use AssignmentStatus::*;
    build_aliases(&[
        ("pending", Assigned),
        ("in review", Assigned),
        ("late", Overdue),
        ("done", Completed),
        ("submitted", Completed),
    ])
});

impl AssignmentStatus {
    /// Returns true if the expert still owes a review.
    pub fn awaits_review(&self) -> bool {
        matches!(self, AssignmentStatus::Assigned | AssignmentStatus::Overdue)
    }
}

impl StatusVocabulary for AssignmentStatus {
    const FALLBACK: Self = AssignmentStatus::Unknown;
    const ALL_LABEL: &'static str = "全部";

    fn all() -> &'static [Self] {
        use AssignmentStatus::*;
        &[Assigned, Overdue, Completed, Unknown]
    }

    fn filterable() -> &'static [Self] {
        use AssignmentStatus::*;
        &[Assigned, Overdue, Completed]
    }

    fn aliases() -> &'static HashMap<String, Self> {
        &ALIASES
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            AssignmentStatus::Assigned => "Assigned",
            AssignmentStatus::Overdue => "Overdue",
            AssignmentStatus::Completed => "Completed",
            AssignmentStatus::Unknown => "Unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Assigned | AssignmentStatus::Unknown => "待审中",
            AssignmentStatus::Overdue => "已逾期",
            AssignmentStatus::Completed => "已完成",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            AssignmentStatus::Assigned => BadgeColor::Orange,
            AssignmentStatus::Overdue => BadgeColor::Red,
            AssignmentStatus::Completed => BadgeColor::Green,
            AssignmentStatus::Unknown => BadgeColor::Gray,
        }
    }
}

super::impl_status_serde!(AssignmentStatus);
