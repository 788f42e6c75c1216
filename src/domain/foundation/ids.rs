//! Strongly-typed identifier value objects.
//!
//! The backend emits identifiers as JSON numbers in some payloads and as
//! strings in others. Every identifier here stores its string form, so an id
//! held in form state compares equal to the same id coming back from a search.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Wire shape of an identifier before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl RawId {
    /// Returns the string-normalized form, or `None` for blank text.
    pub fn normalize(&self) -> Option<String> {
        match self {
            RawId::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            RawId::Signed(n) => Some(n.to_string()),
            RawId::Unsigned(n) => Some(n.to_string()),
            RawId::Float(f) if *f == 0.0 => Some("0".to_string()),
            RawId::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(format!("{:.0}", f)),
            RawId::Float(f) => Some(f.to_string()),
        }
    }
}

/// Normalizes an arbitrary JSON value to an identifier string.
///
/// Strings are trimmed, numbers are rendered without a fractional part when
/// integral. Anything else (null, bool, object, array, blank text) is `None`.
pub fn normalize_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => RawId::Text(s.clone()).normalize(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().and_then(|f| RawId::Float(f).normalize())
            }
        }
        _ => None,
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                let trimmed = id.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Creates the identifier from a numeric backend id.
            pub fn from_number(id: i64) -> Self {
                Self(id.to_string())
            }

            /// Creates the identifier from any JSON value the backend may send.
            pub fn from_value(value: &Value) -> Option<Self> {
                normalize_id(value).map(Self)
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the raw text names this identifier.
            pub fn matches(&self, raw: &str) -> bool {
                self.0 == raw.trim()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self::from_number(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = RawId::deserialize(deserializer)?;
                raw.normalize()
                    .map(Self)
                    .ok_or_else(|| serde::de::Error::custom(concat!($field, " cannot be empty")))
            }
        }
    };
}

string_id!(
    /// Identifier of an authenticated account.
    UserId,
    "user_id"
);

string_id!(
    /// Identifier of an author record (distinct from the login account).
    AuthorId,
    "author_id"
);

string_id!(
    /// Identifier of an institution an author is affiliated with.
    InstitutionId,
    "institution_id"
);

string_id!(
    /// Identifier of a submitted paper.
    PaperId,
    "paper_id"
);

/// Deserializes an optional identifier, mapping blank strings and null to `None`.
///
/// Use with `#[serde(default, deserialize_with = "optional_id")]`.
pub fn optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(normalize_id)
        .and_then(|s| T::from_str(&s).ok()))
}
