//! Business case section validator.

use crate::model::{ValidationIssue, ValidationResult};
use crate::section::Section;

/// Vocabulary a technical justification is expected to draw from.
const TECHNICAL_KEYWORDS: [&str; 13] = [
    "architecture",
    "latency",
    "throughput",
    "database",
    "integration",
    "api",
    "automation",
    "pipeline",
    "scalab",
    "scaling",
    "performance",
    "reliability",
    "availability",
];

/// Vocabulary a KPI alignment answer is expected to draw from.
const KPI_KEYWORDS: [&str; 8] = [
    "kpi",
    "throughput",
    "uptime",
    "availability",
    "mttr",
    "revenue",
    "cost",
    "productivity",
];

/// Answers shorter than this are flagged as weak.
const WEAK_ANSWER_LEN: usize = 30;

fn is_weak(text: &str) -> bool {
    text.trim().len() < WEAK_ANSWER_LEN
}

/// Case-insensitive substring match against a keyword list.
fn contains_keyword(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}

pub fn validate_business_case(section: &Section) -> ValidationResult {
    let mut issues = Vec::new();

    match section.text("Why now") {
        None => issues.push(ValidationIssue::error("Why now", "Missing 'Why now'")),
        Some(why) if is_weak(why) => issues.push(ValidationIssue::warning(
            "Why now",
            "Answer is weak or too short",
        )),
        Some(_) => {}
    }

    match section.text("Consequences of delay") {
        None => issues.push(ValidationIssue::error(
            "Consequences of delay",
            "Missing consequences of delay",
        )),
        Some(cons) if is_weak(cons) => issues.push(ValidationIssue::warning(
            "Consequences of delay",
            "Consequences description is weak or generic",
        )),
        Some(_) => {}
    }

    match section.text("Technical justification") {
        None => issues.push(ValidationIssue::error(
            "Technical justification",
            "Missing technical justification",
        )),
        Some(tech) if !contains_keyword(tech, &TECHNICAL_KEYWORDS) => {
            issues.push(ValidationIssue::warning(
                "Technical justification",
                "Technical justification lacks technical details",
            ))
        }
        Some(_) => {}
    }

    if section.text("Organizational Impact").is_none() {
        issues.push(ValidationIssue::error(
            "Organizational Impact",
            "Missing organizational impact",
        ));
    }

    match section.text("KPI Alignment") {
        None => issues.push(ValidationIssue::error(
            "KPI Alignment",
            "Missing KPI alignment",
        )),
        Some(kpi) if !contains_keyword(kpi, &KPI_KEYWORDS) => {
            issues.push(ValidationIssue::warning(
                "KPI Alignment",
                "KPI alignment not specific or missing KPI keywords",
            ))
        }
        Some(_) => {}
    }

    ValidationResult::from_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use serde_json::json;

    fn business_case(fields: serde_json::Value) -> Section {
        Section::from_value(&json!({ "fields": fields }))
    }

    fn strong_case() -> Section {
        business_case(json!({
            "Why now": "Current manual intake is blocking three delivery teams every sprint",
            "Consequences of delay": "Backlog keeps growing and onboarding slips another quarter",
            "Technical justification": "Replaces brittle spreadsheet macros with an automation pipeline",
            "Organizational Impact": "Aligns with the delivery excellence program",
            "KPI Alignment": "Improves intake throughput and reduces cost per request",
        }))
    }

    #[test]
    fn test_strong_case_passes_without_issues() {
        let result = validate_business_case(&strong_case());
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_case_errors_in_rule_order() {
        let result = validate_business_case(&Section::default());
        assert!(!result.passed);

        let fields: Vec<&str> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "Why now",
                "Consequences of delay",
                "Technical justification",
                "Organizational Impact",
                "KPI Alignment"
            ]
        );
        assert!(result.issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_short_answer_warns_but_does_not_fail() {
        let mut fields = strong_case().fields;
        fields.insert(
            "Why now".to_string(),
            crate::section::FieldValue::Text("ok".to_string()),
        );

        let result = validate_business_case(&Section { fields });
        let issue = result
            .issues
            .iter()
            .find(|i| i.field == "Why now")
            .expect("expected a weak-answer issue");
        assert_eq!(issue.severity, Severity::Warning);
        assert!(result.passed, "a warning alone must not fail the section");
    }

    #[test]
    fn test_non_technical_justification_warns() {
        let mut fields = strong_case().fields;
        fields.insert(
            "Technical justification".to_string(),
            crate::section::FieldValue::Text("Everyone agrees it would be nice".to_string()),
        );
        let result = validate_business_case(&Section { fields });

        let issue = result
            .issues
            .iter()
            .find(|i| i.field == "Technical justification")
            .unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(result.passed);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert!(contains_keyword("Reduce LATENCY under load", &TECHNICAL_KEYWORDS));
        assert!(contains_keyword("tracked KPI: uptime", &KPI_KEYWORDS));
        assert!(!contains_keyword("a nice idea", &TECHNICAL_KEYWORDS));
    }

    #[test]
    fn test_scalability_prefix_matches_derived_forms() {
        // "scalab" catches scalability/scalable without a stemmer.
        assert!(contains_keyword("improves scalability", &TECHNICAL_KEYWORDS));
        assert!(contains_keyword("more scalable ingest", &TECHNICAL_KEYWORDS));
    }
}
