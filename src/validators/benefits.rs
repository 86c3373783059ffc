//! Expected benefits section validator.
//!
//! Checks the qualitative benefits answer plus the four required cost
//! categories inside the nested `Quantitative` group. Quantitative issues
//! carry qualified field names (`Quantitative:<subfield>`) so the report can
//! track each category independently.

use crate::model::{ValidationIssue, ValidationResult};
use crate::section::Section;

/// Required sub-fields of the `Quantitative` group, in reporting order.
pub const QUANTITATIVE_FIELDS: [&str; 4] =
    ["Tech Hardware", "Custom Hardware", "Software", "Custom Software"];

/// Qualitative answers shorter than this are flagged as vague.
const VAGUE_BENEFITS_LEN: usize = 20;

pub fn validate_expected_benefits(section: &Section) -> ValidationResult {
    let mut issues = Vec::new();

    match section.text("Qualitative Benefits") {
        None => issues.push(ValidationIssue::error(
            "Qualitative Benefits",
            "Missing qualitative benefits",
        )),
        Some(qual) if qual.len() < VAGUE_BENEFITS_LEN => {
            issues.push(ValidationIssue::warning(
                "Qualitative Benefits",
                "Qualitative benefits vague or short",
            ))
        }
        Some(_) => {}
    }

    let quantitative = section.group("Quantitative");
    for sub_field in QUANTITATIVE_FIELDS {
        let present = quantitative
            .and_then(|group| group.get(sub_field))
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);
        if !present {
            issues.push(ValidationIssue::error(
                format!("Quantitative:{sub_field}"),
                format!("Missing {sub_field}"),
            ));
        }
    }

    ValidationResult::from_issues(issues)
}
