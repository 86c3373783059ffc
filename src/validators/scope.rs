//! Project scope section validator.
//!
//! The strictest of the five: both fields are required and there is no
//! warning tier, so passing means an empty issue list.

use crate::model::{ValidationIssue, ValidationResult};
use crate::section::Section;

pub fn validate_scope(section: &Section) -> ValidationResult {
    let mut issues = Vec::new();

    if section.text("In Scope").is_none() {
        issues.push(ValidationIssue::error("In Scope", "Missing"));
    }

    if section.text("Out of Scope").is_none() {
        issues.push(ValidationIssue::error("Out of Scope", "Missing"));
    }

    ValidationResult::from_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_both_fields_present_passes_with_no_issues() {
        let section = Section::from_value(&json!({
            "fields": {
                "In Scope": "Automated intake validation for the standard template",
                "Out of Scope": "Custom templates and non-English forms",
            }
        }));
        let result = validate_scope(&section);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_scope_errors_both_fields() {
        let result = validate_scope(&Section::default());
        assert!(!result.passed);

        let fields: Vec<&str> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["In Scope", "Out of Scope"]);
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let section = Section::from_value(&json!({
            "fields": {"In Scope": "   ", "Out of Scope": "Custom templates"}
        }));
        let result = validate_scope(&section);
        assert!(result.has_error_for("In Scope"));
        assert!(!result.has_error_for("Out of Scope"));
    }
}
