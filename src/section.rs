//! Canonical section input model and the normalization boundary.
//!
//! Extractor output is untrusted JSON: sections may be strings instead of
//! objects, `fields` may be missing or mistyped, values may be null, numeric
//! or nested. All of that is normalized here, once, so validators only ever
//! see canonical [`Section`] values and never touch raw JSON.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::SectionKey;

/// A single field value inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Nested sub-field mapping (the benefits `Quantitative` group).
    Group(BTreeMap<String, String>),
}

/// One named section of the intake document, normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Section {
    /// Normalize one section from untrusted JSON.
    ///
    /// A non-object section (string, null, number, array) normalizes to an
    /// empty section. A missing or mistyped `fields` key normalizes to no
    /// fields. Scalar field values coerce to their string form; unusable
    /// values are dropped.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut fields = BTreeMap::new();

        if let Some(raw_fields) = value.get("fields").and_then(|f| f.as_object()) {
            for (name, raw) in raw_fields {
                match raw {
                    serde_json::Value::Object(group) => {
                        let mut sub = BTreeMap::new();
                        for (sub_name, sub_raw) in group {
                            if let Some(text) = coerce_text(sub_raw) {
                                sub.insert(sub_name.clone(), text);
                            }
                        }
                        fields.insert(name.clone(), FieldValue::Group(sub));
                    }
                    other => {
                        if let Some(text) = coerce_text(other) {
                            fields.insert(name.clone(), FieldValue::Text(text));
                        }
                    }
                }
            }
        }

        Self { fields }
    }

    /// Trimmed, non-empty text of a field, or `None` if the field is absent,
    /// not text, or whitespace-only. This is the presence check every
    /// validator rule builds on.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// Nested sub-field group of a field, or `None` if absent or not a group.
    pub fn group(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match self.fields.get(name) {
            Some(FieldValue::Group(g)) => Some(g),
            _ => None,
        }
    }
}

/// Coerce a scalar JSON value to text. Nulls, arrays and objects yield `None`.
fn coerce_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// All extracted sections for one document, normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sections {
    sections: BTreeMap<SectionKey, Section>,
}

impl Sections {
    /// Normalize the full extractor output object.
    ///
    /// Non-object input yields an empty mapping; a missing key for any
    /// section leaves that section absent (callers substitute an empty
    /// section via [`Sections::get`]).
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut sections = BTreeMap::new();

        if let Some(obj) = value.as_object() {
            for key in SectionKey::ALL {
                if let Some(raw) = obj.get(key.as_str()) {
                    sections.insert(key, Section::from_value(raw));
                }
            }
        }

        Self { sections }
    }

    /// The section for `key`, or an empty section if extraction produced
    /// nothing for it. A run never fails because one key was absent.
    pub fn get(&self, key: SectionKey) -> Section {
        self.sections.get(&key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.sections.contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_section_normalizes_to_empty() {
        for raw in [json!("just a string"), json!(null), json!(42), json!([1, 2])] {
            let section = Section::from_value(&raw);
            assert!(section.fields.is_empty());
        }
    }

    #[test]
    fn test_missing_or_mistyped_fields_key() {
        let section = Section::from_value(&json!({}));
        assert!(section.fields.is_empty());

        let section = Section::from_value(&json!({"fields": "oops"}));
        assert!(section.fields.is_empty());

        let section = Section::from_value(&json!({"fields": null}));
        assert!(section.fields.is_empty());
    }

    #[test]
    fn test_text_trims_and_rejects_whitespace() {
        let section = Section::from_value(&json!({
            "fields": {
                "Project Name": "  Apollo  ",
                "Practice/Account": "   ",
                "Deadline": null,
            }
        }));

        assert_eq!(section.text("Project Name"), Some("Apollo"));
        assert_eq!(section.text("Practice/Account"), None);
        assert_eq!(section.text("Deadline"), None);
        assert_eq!(section.text("Start Date"), None);
    }

    #[test]
    fn test_scalars_coerce_to_text() {
        let section = Section::from_value(&json!({
            "fields": {"Why now": 2026, "In Scope": true}
        }));
        assert_eq!(section.text("Why now"), Some("2026"));
        assert_eq!(section.text("In Scope"), Some("true"));
    }

    #[test]
    fn test_nested_group_normalizes() {
        let section = Section::from_value(&json!({
            "fields": {
                "Qualitative Benefits": "Less toil for the support team",
                "Quantitative": {
                    "Tech Hardware": "10k",
                    "Software": null,
                    "Custom Software": 5000,
                }
            }
        }));

        let quant = section.group("Quantitative").unwrap();
        assert_eq!(quant.get("Tech Hardware").map(String::as_str), Some("10k"));
        assert_eq!(quant.get("Custom Software").map(String::as_str), Some("5000"));
        assert!(!quant.contains_key("Software"), "null sub-field is dropped");
        assert!(section.group("Qualitative Benefits").is_none());
    }

    #[test]
    fn test_sections_from_non_object_is_empty() {
        let sections = Sections::from_value(&json!("not an object"));
        for key in SectionKey::ALL {
            assert!(!sections.contains(key));
            assert!(sections.get(key).fields.is_empty());
        }
    }

    #[test]
    fn test_missing_section_key_yields_empty_section() {
        let sections = Sections::from_value(&json!({
            "header": {"fields": {"Project Name": "Apollo"}}
        }));

        assert!(sections.contains(SectionKey::Header));
        assert!(!sections.contains(SectionKey::ProjectScope));
        assert!(sections.get(SectionKey::ProjectScope).fields.is_empty());
    }
}
