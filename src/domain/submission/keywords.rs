//! Keyword lists as typed by authors and as stored by the backend.
//!
//! A freshly typed keyword is a plain string; a persisted one comes back as
//! an `[id, label]` pair. Both collapse to the label.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::normalize_id;

/// One element of a keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordEntry {
    Plain(String),
    Stored(Value, Option<String>),
}

impl KeywordEntry {
    /// Reads one list element. Shapes other than a string or a two-element
    /// array are not keywords.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(KeywordEntry::Plain(s.clone())),
            Value::Array(items) if items.len() == 2 => {
                let label = items[1].as_str().map(str::to_string);
                Some(KeywordEntry::Stored(items[0].clone(), label))
            }
            _ => None,
        }
    }

    /// The keyword text, if non-empty.
    pub fn label(&self) -> Option<&str> {
        let label = match self {
            KeywordEntry::Plain(s) => s.as_str(),
            KeywordEntry::Stored(_, label) => label.as_deref()?,
        };
        (!label.is_empty()).then_some(label)
    }

    /// Backend id of a stored keyword.
    pub fn id(&self) -> Option<String> {
        match self {
            KeywordEntry::Plain(_) => None,
            KeywordEntry::Stored(id, _) => normalize_id(id),
        }
    }
}

/// Collapses a raw keyword list to its labels, dropping empty entries.
pub fn normalize_keywords(list: &[Value]) -> Vec<String> {
    list.iter()
        .filter_map(KeywordEntry::from_value)
        .filter_map(|entry| entry.label().map(str::to_string))
        .collect()
}

/// Same as [`normalize_keywords`] for a payload that may not be a list at all.
pub fn normalize_keyword_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => normalize_keywords(items),
        _ => Vec::new(),
    }
}

/// Trims, drops blanks and removes duplicates, keeping first occurrences.
pub fn sanitize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    keywords
        .into_iter()
        .filter_map(|k| {
            let trimmed = k.as_ref().trim();
            (!trimmed.is_empty() && seen.insert(trimmed.to_string())).then(|| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_pairs_keeps_strings_drops_empty() {
        let list = vec![json!(["1", "AI"]), json!("ML"), json!("")];
        assert_eq!(normalize_keywords(&list), vec!["AI", "ML"]);
    }

    #[test]
    fn drops_falsy_and_odd_shapes() {
        let list = vec![
            json!(null),
            json!(false),
            json!(0),
            json!([3, null]),
            json!([4, ""]),
            json!(["only-one"]),
            json!({"label": "x"}),
            json!([5, "NLP"]),
        ];
        assert_eq!(normalize_keywords(&list), vec!["NLP"]);
    }

    #[test]
    fn non_list_payload_has_no_keywords() {
        assert!(normalize_keyword_value(&json!(null)).is_empty());
        assert!(normalize_keyword_value(&json!("AI")).is_empty());
        assert_eq!(normalize_keyword_value(&json!(["AI"])), vec!["AI"]);
    }

    #[test]
    fn entries_deserialize_untagged() {
        let entries: Vec<KeywordEntry> = serde_json::from_value(json!([[7, "深度学习"], "RL"])).unwrap();
        assert_eq!(entries[0].label(), Some("深度学习"));
        assert_eq!(entries[0].id().as_deref(), Some("7"));
        assert_eq!(entries[1], KeywordEntry::Plain("RL".into()));
        assert_eq!(entries[1].id(), None);
    }

    #[test]
    fn sanitize_trims_and_dedups_in_order() {
        let out = sanitize_keywords(vec![" AI ", "ML", "", "AI", "  ", "ML ", "CV"]);
        assert_eq!(out, vec!["AI", "ML", "CV"]);
    }
}
