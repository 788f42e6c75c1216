//! List payload decoding at the API boundary.
//!
//! List endpoints answer either with a bare array or with the array wrapped
//! in an object under one of a few keys. [`ListPayload`] names which shape
//! arrived so the rest of the crate only ever sees a list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::domain::authorship::DirectoryError;

/// Wrapper keys checked, in priority order.
pub const WRAPPER_KEYS: [&str; 4] = ["items", "data", "results", "list"];

/// Shape of a list-bearing response.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload {
    /// The payload itself is the array.
    Bare(Vec<Value>),
    /// The array sits under a wrapper key.
    Wrapped { key: &'static str, items: Vec<Value> },
    /// No array anywhere recognisable.
    Absent,
}

impl ListPayload {
    /// Classifies a payload. Never fails.
    pub fn decode(value: &Value) -> Self {
        match value {
            Value::Array(items) => ListPayload::Bare(items.clone()),
            Value::Object(map) => WRAPPER_KEYS
                .iter()
                .find_map(|key| match map.get(*key) {
                    Some(Value::Array(items)) => Some(ListPayload::Wrapped {
                        key: *key,
                        items: items.clone(),
                    }),
                    _ => None,
                })
                .unwrap_or(ListPayload::Absent),
            _ => ListPayload::Absent,
        }
    }

    pub fn items(&self) -> &[Value] {
        match self {
            ListPayload::Bare(items) | ListPayload::Wrapped { items, .. } => items,
            ListPayload::Absent => &[],
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            ListPayload::Bare(items) | ListPayload::Wrapped { items, .. } => items,
            ListPayload::Absent => Vec::new(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ListPayload::Absent)
    }
}

impl<'de> Deserialize<'de> for ListPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ListPayload::decode(&value))
    }
}

/// Returns the list carried by any payload, or an empty list.
pub fn ensure_array(value: &Value) -> Vec<Value> {
    ListPayload::decode(value).into_items()
}

/// Decodes list items into `T`, skipping items that do not decode.
pub fn decode_list<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    let items = ensure_array(value);
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if decoded.len() < total {
        warn!(
            skipped = total - decoded.len(),
            total,
            "skipped undecodable list items"
        );
    }
    decoded
}

/// Decodes list items into `T`, failing on the first bad item or when the
/// payload carries no list at all.
pub fn decode_list_strict<T: DeserializeOwned>(value: &Value) -> Result<Vec<T>, DirectoryError> {
    let payload = ListPayload::decode(value);
    if payload.is_absent() {
        return Err(DirectoryError::Malformed("response carries no list".into()));
    }
    payload
        .into_items()
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| DirectoryError::Malformed(e.to_string())))
        .collect()
}
