//! Problem statement section validator.

use crate::model::{ValidationIssue, ValidationResult};
use crate::section::Section;

/// Problem definitions shorter than this are flagged as vague.
const SHORT_DEFINITION_LEN: usize = 30;

pub fn validate_problem(section: &Section) -> ValidationResult {
    let mut issues = Vec::new();

    match section.text("Problem Definition") {
        None => issues.push(ValidationIssue::error(
            "Problem Definition",
            "Missing problem definition",
        )),
        Some(definition) if definition.len() < SHORT_DEFINITION_LEN => {
            issues.push(ValidationIssue::warning(
                "Problem Definition",
                "Problem definition is short or vague",
            ))
        }
        Some(_) => {}
    }

    if section.text("Current Pain Points").is_none() {
        issues.push(ValidationIssue::error(
            "Current Pain Points",
            "Missing current pain points",
        ));
    }

    if section.text("Business/System Impact").is_none() {
        issues.push(ValidationIssue::error(
            "Business/System Impact",
            "Missing business/system impact",
        ));
    }

    if section.text("Who is affected").is_none() {
        issues.push(ValidationIssue::error(
            "Who is affected",
            "Missing affected stakeholders or teams",
        ));
    }

    ValidationResult::from_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use serde_json::json;

    fn problem(fields: serde_json::Value) -> Section {
        Section::from_value(&json!({ "fields": fields }))
    }

    #[test]
    fn test_complete_statement_passes() {
        let section = problem(json!({
            "Problem Definition": "Intake requests arrive as free text and are triaged by hand",
            "Current Pain Points": "Triage takes days and fields are routinely missing",
            "Business/System Impact": "Projects start late and estimates are unreliable",
            "Who is affected": "Delivery leads and the PMO",
        }));
        let result = validate_problem(&section);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_statement_errors_in_rule_order() {
        let result = validate_problem(&Section::default());
        assert!(!result.passed);

        let fields: Vec<&str> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "Problem Definition",
                "Current Pain Points",
                "Business/System Impact",
                "Who is affected"
            ]
        );
        assert!(result.issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_short_definition_warns_only() {
        let section = problem(json!({
            "Problem Definition": "It is slow",
            "Current Pain Points": "Manual triage",
            "Business/System Impact": "Late starts",
            "Who is affected": "PMO",
        }));
        let result = validate_problem(&section);

        let issue = result
            .issues
            .iter()
            .find(|i| i.field == "Problem Definition")
            .unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(result.passed);
    }
}
