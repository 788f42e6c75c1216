//! Status vocabularies - canonical statuses derived from backend strings.
//!
//! The backend is inconsistent about casing, spacing and separators in its
//! status fields. Each vocabulary here is a closed enum with a data-driven
//! alias table; normalization never fails and always lands on exactly one
//! canonical value, falling back to the vocabulary's sentinel.
//!
//! # Vocabularies
//!
//! - [`ReviewConclusion`] - expert verdict on a paper
//! - [`ProgressStatus`] - editorial pipeline stage reported by the backend
//! - [`IntegrityStatus`] - editor's completeness check of a submission
//! - [`AssignmentStatus`] - state of a review assignment for an expert
//! - [`PaymentStatus`] - publication fee state
//! - [`WithdrawalStatus`] - reviewer fee withdrawal state

mod assignment;
mod filter;
mod integrity;
mod payment;
mod progress_status;
mod review;
mod withdrawal;

pub use assignment::AssignmentStatus;
pub use filter::{FilterOption, StatusFilter, ALL_FILTER_VALUE};
pub use integrity::IntegrityStatus;
pub use payment::PaymentStatus;
pub use progress_status::ProgressStatus;
pub use review::ReviewConclusion;
pub use withdrawal::WithdrawalStatus;

use std::collections::HashMap;
use std::hash::Hash;

use serde_json::Value;

use crate::domain::foundation::BadgeColor;

/// A closed set of canonical statuses with labels and colors.
///
/// Implementors supply the data (variants, aliases, labels, colors); the
/// provided methods supply the total, idempotent normalization.
pub trait StatusVocabulary: Sized + Copy + Eq + Hash + Send + Sync + 'static {
    /// Canonical value for anything the alias table does not recognise.
    const FALLBACK: Self;

    /// Label of the "no filter" option in filter lists.
    const ALL_LABEL: &'static str;

    /// Every canonical value, fallback included.
    fn all() -> &'static [Self];

    /// Values offered as filter choices, in display order.
    fn filterable() -> &'static [Self];

    /// Lookup table from normalized keys to canonical values.
    fn aliases() -> &'static HashMap<String, Self>;

    /// Backend wire value of the canonical status.
    fn canonical_name(&self) -> &'static str;

    /// Display label.
    fn label(&self) -> &'static str;

    /// Display color.
    fn color(&self) -> BadgeColor;

    /// Canonical value the alias table holds for the text, if any.
    fn lookup(raw: &str) -> Option<Self> {
        let key = lookup_key(raw);
        let table = Self::aliases();
        table
            .get(&key)
            .or_else(|| table.get(&underscored(&key)))
            .or_else(|| table.get(&compact(&key)))
            .copied()
    }

    /// Maps raw backend text to a canonical value.
    fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::lookup).unwrap_or(Self::FALLBACK)
    }

    /// Maps an arbitrary JSON value (string, number, bool, null) to a
    /// canonical value.
    fn normalize_value(value: &Value) -> Self {
        Self::normalize(raw_text(value).as_deref())
    }

    /// Label of whatever the raw text normalizes to.
    fn label_for(raw: Option<&str>) -> &'static str {
        Self::normalize(raw).label()
    }

    /// Color of whatever the raw text normalizes to.
    fn color_for(raw: Option<&str>) -> BadgeColor {
        Self::normalize(raw).color()
    }

    /// Returns true if this is the fallback sentinel.
    fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

/// Renders scalar JSON values as the text a status field would carry.
pub fn raw_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Trims, lower-cases and collapses internal whitespace.
fn lookup_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn underscored(key: &str) -> String {
    key.replace([' ', '-'], "_")
}

fn compact(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// Builds an alias table from canonical values and their extra aliases.
///
/// Every canonical name is registered in its lower-case, underscored and
/// compact forms, so canonical output always normalizes back to itself.
pub(crate) fn build_aliases<S: StatusVocabulary>(extra: &[(&str, S)]) -> HashMap<String, S> {
    let mut table = HashMap::new();
    for status in S::all() {
        let key = lookup_key(status.canonical_name());
        table.insert(underscored(&key), *status);
        table.insert(compact(&key), *status);
        table.insert(key, *status);
    }
    for (alias, status) in extra {
        table.insert(lookup_key(alias), *status);
    }
    table
}

/// Implements lenient serde for a vocabulary: serializes the canonical name,
/// deserializes any scalar through `normalize_value`.
macro_rules! impl_status_serde {
    ($name:ty) => {
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(
                    <$name as $crate::domain::status::StatusVocabulary>::canonical_name(self),
                )
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$name as $crate::domain::status::StatusVocabulary>::normalize_value(&value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<$name as $crate::domain::status::StatusVocabulary>::label(self))
            }
        }
    };
}

pub(crate) use impl_status_serde;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_key_collapses_whitespace_and_case() {
        assert_eq!(lookup_key("  Minor   REVISION "), "minor revision");
    }

    #[test]
    fn separators_fold_to_underscore_and_compact() {
        assert_eq!(underscored("minor-revision now"), "minor_revision_now");
        assert_eq!(compact("minor_revision"), "minorrevision");
    }

    #[test]
    fn raw_text_renders_scalars_only() {
        assert_eq!(raw_text(&serde_json::json!(1)), Some("1".to_string()));
        assert_eq!(raw_text(&serde_json::json!(false)), Some("false".to_string()));
        assert_eq!(raw_text(&serde_json::json!(null)), None);
        assert_eq!(raw_text(&serde_json::json!([1])), None);
    }
}
