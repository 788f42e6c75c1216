//! Author row value types shared by the search widgets and the paper form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{optional_id, AuthorId, InstitutionId};

/// An author as returned by the author search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(alias = "id")]
    pub author_id: AuthorId,
    #[serde(default)]
    pub name: String,
}

impl AuthorInfo {
    pub fn new(author_id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            author_id,
            name: name.into(),
        }
    }

    /// Text shown in the author field once selected.
    pub fn display_value(&self) -> String {
        format!("{} / ID: {}", self.name, self.author_id)
    }
}

/// An institution an author is affiliated with.
///
/// The backend names this record inconsistently, so decoding accepts the id
/// as `institution_id` or `id` and the name as the first non-empty of
/// `name`, `institution_name`, `full_name` and `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionOption {
    pub institution_id: InstitutionId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

const NAME_FIELDS: [&str; 4] = ["name", "institution_name", "full_name", "title"];

impl InstitutionOption {
    pub fn new(institution_id: InstitutionId, name: impl Into<String>) -> Self {
        Self {
            institution_id,
            name: name.into(),
            city: None,
            zip_code: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Reads an institution from a JSON object. Returns `None` without an id.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let institution_id = map
            .get("institution_id")
            .and_then(InstitutionId::from_value)
            .or_else(|| map.get("id").and_then(InstitutionId::from_value))?;
        Some(Self {
            institution_id,
            name: display_name(map),
            city: text_field(map, "city"),
            zip_code: text_field(map, "zip_code"),
        })
    }
}

impl<'de> Deserialize<'de> for InstitutionOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        InstitutionOption::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("institution record has no id"))
    }
}

fn display_name(map: &Map<String, Value>) -> String {
    NAME_FIELDS
        .iter()
        .find_map(|key| text_field(map, key))
        .unwrap_or_default()
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One author row of a paper as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorEntry {
    #[serde(default, deserialize_with = "optional_id")]
    pub author_id: Option<AuthorId>,
    #[serde(default)]
    pub author_info: Option<AuthorInfo>,
    #[serde(default, deserialize_with = "optional_id")]
    pub institution_id: Option<InstitutionId>,
    #[serde(default)]
    pub institution_info: Option<InstitutionOption>,
    #[serde(default)]
    pub is_corresponding: bool,
}

impl AuthorEntry {
    /// An empty row, as created by "add author".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_author(&self) -> bool {
        self.author_id.is_some()
    }

    pub fn has_institution(&self) -> bool {
        self.institution_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_info_accepts_numeric_ids() {
        let info: AuthorInfo = serde_json::from_value(json!({"author_id": 42, "name": "李雷"})).unwrap();
        assert_eq!(info.author_id.as_str(), "42");
        assert_eq!(info.display_value(), "李雷 / ID: 42");
    }

    #[test]
    fn institution_name_falls_back_through_aliases() {
        let inst = InstitutionOption::from_value(&json!({
            "id": 7,
            "name": "",
            "institution_name": "  ",
            "full_name": "清华大学",
            "title": "Tsinghua",
        }))
        .unwrap();
        assert_eq!(inst.institution_id.as_str(), "7");
        assert_eq!(inst.name, "清华大学");
    }

    #[test]
    fn institution_prefers_institution_id_and_reads_extras() {
        let inst = InstitutionOption::from_value(&json!({
            "institution_id": "3",
            "id": 99,
            "title": "Lab",
            "city": "北京",
            "zip_code": 100084,
        }))
        .unwrap();
        assert_eq!(inst.institution_id.as_str(), "3");
        assert_eq!(inst.name, "Lab");
        assert_eq!(inst.city.as_deref(), Some("北京"));
        assert_eq!(inst.zip_code.as_deref(), Some("100084"));
    }

    #[test]
    fn institution_without_id_is_rejected() {
        assert!(InstitutionOption::from_value(&json!({"name": "Nowhere"})).is_none());
        assert!(serde_json::from_value::<InstitutionOption>(json!({"name": "x"})).is_err());
    }

    #[test]
    fn institution_without_any_name_gets_empty_name() {
        let inst = InstitutionOption::from_value(&json!({"id": 1})).unwrap();
        assert_eq!(inst.name, "");
    }

    #[test]
    fn author_entry_decodes_nulls_and_blank_ids() {
        let entry: AuthorEntry = serde_json::from_value(json!({
            "author_id": "",
            "author_info": null,
            "institution_id": null,
        }))
        .unwrap();
        assert_eq!(entry, AuthorEntry::empty());
        assert!(!entry.is_corresponding);
    }

    #[test]
    fn author_entry_decodes_mixed_id_types() {
        let entry: AuthorEntry = serde_json::from_value(json!({
            "author_id": 5,
            "author_info": {"author_id": "5", "name": "Ann"},
            "institution_id": "12",
            "institution_info": {"id": 12, "institution_name": "MIT"},
            "is_corresponding": true,
        }))
        .unwrap();
        assert_eq!(entry.author_id, Some(AuthorId::from_number(5)));
        assert_eq!(entry.institution_info.as_ref().unwrap().name, "MIT");
        assert!(entry.has_institution());
    }
}
