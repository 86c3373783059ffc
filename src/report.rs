//! Feedback report formatters.
//!
//! Two deterministic renderings of a [`ValidationRecord`]:
//!
//! - [`format_checklist`] is the authoritative contract and what the pipeline
//!   emits: one fixed line per tracked check plus an overall verdict.
//! - [`format_issue_list`] is a terser alternate that lists raw issues.
//!
//! Both are pure functions of the record: no timestamps, no color codes, no
//! ordering randomness, so repeated calls yield byte-identical output.

use serde::Deserialize;

use crate::model::{SectionKey, ValidationRecord, ValidationResult};
use crate::validators::QUANTITATIVE_FIELDS;

/// Selectable report renderings. `Checklist` is the authoritative contract;
/// `Issues` lists raw issues; `Json` serializes the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Checklist,
    Issues,
    Json,
}

pub const VERDICT_READY: &str = "READY FOR REVIEW";
pub const VERDICT_NEEDS_REVISION: &str = "NEEDS REVISION";

/// Fixed all-clear string for the issue-listing variant.
pub const ALL_CLEAR: &str = "All sections passed validation.";

const PASS: char = '✓';
const FAIL: char = '✗';

/// Tracked header checklist fields, matching the validator vocabulary.
const HEADER_CHECKS: [&str; 5] = [
    "Practice/Account",
    "Project Name",
    "Ticket Hyperlink",
    "Start Date",
    "Deadline",
];

/// Tracked business-case checklist fields.
const BUSINESS_CHECKS: [&str; 5] = [
    "Why now",
    "Consequences of delay",
    "Technical justification",
    "Organizational Impact",
    "KPI Alignment",
];

/// Fields whose absence of ERRORs makes the problem statement complete.
const PROBLEM_FIELDS: [&str; 4] = [
    "Problem Definition",
    "Current Pain Points",
    "Business/System Impact",
    "Who is affected",
];

const SCOPE_CHECKS: [&str; 2] = ["In Scope", "Out of Scope"];

/// A tracked check passes iff a result exists for the section AND it carries
/// no ERROR-severity issue for that field. A missing section fails every one
/// of its checks; the aggregate `passed` flag is deliberately not consulted.
fn field_ok(result: Option<&ValidationResult>, field: &str) -> bool {
    match result {
        Some(result) => !result.has_error_for(field),
        None => false,
    }
}

fn glyph(ok: bool) -> char {
    if ok {
        PASS
    } else {
        FAIL
    }
}

/// Render the fixed-format validation checklist with an overall verdict.
pub fn format_checklist(record: &ValidationRecord) -> String {
    let mut lines = Vec::new();
    let mut all_ok = true;
    let mut check = |ok: bool| {
        all_ok &= ok;
        glyph(ok)
    };

    lines.push("Intake Validation Summary".to_string());
    lines.push(String::new());

    let header = record.get(SectionKey::Header);
    lines.push(format!("{}:", SectionKey::Header.title()));
    for field in HEADER_CHECKS {
        lines.push(format!("{field}: {}", check(field_ok(header, field))));
    }
    lines.push(String::new());

    let business = record.get(SectionKey::BusinessCase);
    lines.push(format!("{}:", SectionKey::BusinessCase.title()));
    for field in BUSINESS_CHECKS {
        lines.push(format!("{field}: {}", check(field_ok(business, field))));
    }
    lines.push(String::new());

    let problem = record.get(SectionKey::ProblemStatement);
    let clarity = field_ok(problem, "Problem Definition");
    let completeness =
        problem.is_some() && PROBLEM_FIELDS.iter().all(|field| field_ok(problem, field));
    lines.push(format!("{}:", SectionKey::ProblemStatement.title()));
    lines.push(format!("Clarity: {}", check(clarity)));
    lines.push(format!("Completeness: {}", check(completeness)));
    lines.push(String::new());

    let scope = record.get(SectionKey::ProjectScope);
    lines.push(format!("{}:", SectionKey::ProjectScope.title()));
    for field in SCOPE_CHECKS {
        lines.push(format!("{field}: {}", check(field_ok(scope, field))));
    }
    lines.push(String::new());

    let benefits = record.get(SectionKey::ExpectedBenefits);
    lines.push(format!("{}:", SectionKey::ExpectedBenefits.title()));
    lines.push(format!(
        "Qualitative benefits: {}",
        check(field_ok(benefits, "Qualitative Benefits"))
    ));
    lines.push("Quantitative benefits:".to_string());
    for sub_field in QUANTITATIVE_FIELDS {
        let qualified = format!("Quantitative:{sub_field}");
        lines.push(format!(
            "{sub_field}: {}",
            check(field_ok(benefits, &qualified))
        ));
    }
    lines.push(String::new());

    lines.push("OVERALL STATUS:".to_string());
    lines.push(if all_ok { VERDICT_READY } else { VERDICT_NEEDS_REVISION }.to_string());

    lines.join("\n")
}

/// Render a flat issue list, or a fixed all-clear string when every recorded
/// section passed and none of the five sections is missing.
pub fn format_issue_list(record: &ValidationRecord) -> String {
    let complete = SectionKey::ALL.iter().all(|key| record.get(*key).is_some());
    if complete && record.all_passed() {
        return ALL_CLEAR.to_string();
    }

    let mut lines = Vec::new();
    for key in SectionKey::ALL {
        match record.get(key) {
            Some(result) => {
                for issue in &result.issues {
                    lines.push(format!(
                        "- [{key}] {}: {}",
                        issue.field, issue.description
                    ));
                }
            }
            None => lines.push(format!("- [{key}] section: No validation result")),
        }
    }

    lines.join("\n")
}
