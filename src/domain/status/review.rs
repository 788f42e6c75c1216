//! ReviewConclusion - an expert's verdict on a paper.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{build_aliases, StatusVocabulary};
use crate::domain::foundation::BadgeColor;

/// Canonical review conclusion.
///
/// Also used as the paper-level "review status" that author lists filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewConclusion {
    Accept,
    MinorRevision,
    MajorRevision,
    Reject,
    /// No conclusion yet, or an unrecognised value.
    #[default]
    Unknown,
}

static ALIASES: Lazy<HashMap<String, ReviewConclusion>> = Lazy::new(|| {
    use ReviewConclusion::*;
    build_aliases(&[
        ("accepted", Accept),
        ("acceptance", Accept),
        ("rejected", Reject),
        ("rejection", Reject),
        ("", Unknown),
        ("pending", Unknown),
        ("draft", Unknown),
        ("not reviewed", Unknown),
    ])
});

impl ReviewConclusion {
    /// Returns true if the author is expected to upload a revised manuscript.
    pub fn requires_revision(&self) -> bool {
        matches!(
            self,
            ReviewConclusion::MinorRevision | ReviewConclusion::MajorRevision
        )
    }

    /// Returns true if a verdict has been reached.
    pub fn is_concluded(&self) -> bool {
        !matches!(self, ReviewConclusion::Unknown)
    }
}

impl StatusVocabulary for ReviewConclusion {
    const FALLBACK: Self = ReviewConclusion::Unknown;
    const ALL_LABEL: &'static str = "全部评审意见";

    fn all() -> &'static [Self] {
        use ReviewConclusion::*;
        &[Accept, MinorRevision, MajorRevision, Reject, Unknown]
    }

    fn filterable() -> &'static [Self] {
        use ReviewConclusion::*;
        &[Accept, MinorRevision, MajorRevision, Reject]
    }

    fn aliases() -> &'static HashMap<String, Self> {
        &ALIASES
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            ReviewConclusion::Accept => "Accept",
            ReviewConclusion::MinorRevision => "Minor Revision",
            ReviewConclusion::MajorRevision => "Major Revision",
            ReviewConclusion::Reject => "Reject",
            ReviewConclusion::Unknown => "Unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReviewConclusion::Accept => "接收",
            ReviewConclusion::MinorRevision => "小修",
            ReviewConclusion::MajorRevision => "大修",
            ReviewConclusion::Reject => "拒稿",
            ReviewConclusion::Unknown => "暂无评审意见",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            ReviewConclusion::Accept => BadgeColor::Green,
            ReviewConclusion::MinorRevision => BadgeColor::Yellow,
            ReviewConclusion::MajorRevision => BadgeColor::Orange,
            ReviewConclusion::Reject => BadgeColor::Red,
            ReviewConclusion::Unknown => BadgeColor::Gray,
        }
    }
}

super::impl_status_serde!(ReviewConclusion);
