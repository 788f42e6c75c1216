//! StatusFilter - "all or one status" selection used by list pages.

use serde::Serialize;
use tracing::debug;

use super::StatusVocabulary;

/// Wire value of the "no filter" option.
pub const ALL_FILTER_VALUE: &str = "all";

/// One entry of a filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Filter over a status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: StatusVocabulary> StatusFilter<S> {
    /// Parses a dropdown value. `"all"`, blank and values that name no
    /// filterable status select everything.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => StatusFilter::All,
            Some(v) if v.eq_ignore_ascii_case(ALL_FILTER_VALUE) => StatusFilter::All,
            Some(v) => match S::lookup(v).filter(|s| S::filterable().contains(s)) {
                Some(status) => StatusFilter::Only(status),
                None => {
                    debug!(value = v, "unrecognised status filter, showing all");
                    StatusFilter::All
                }
            },
        }
    }

    /// Returns true if a row with this raw status passes the filter.
    pub fn matches(&self, raw: Option<&str>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => S::normalize(raw) == *wanted,
        }
    }

    /// Query parameter to send, `None` when unfiltered.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(s) => Some(s.canonical_name()),
        }
    }

    /// Dropdown options: the "all" entry followed by each filterable status.
    pub fn options() -> Vec<FilterOption> {
        std::iter::once(FilterOption {
            label: S::ALL_LABEL,
            value: ALL_FILTER_VALUE,
        })
        .chain(S::filterable().iter().map(|s| FilterOption {
            label: s.label(),
            value: s.canonical_name(),
        }))
        .collect()
    }
}
