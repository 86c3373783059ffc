//! Header section validator.
//!
//! Checks the identifying fields of the intake form: practice/account,
//! project name, ticket hyperlink, start date and deadline.

use chrono::{NaiveDate, NaiveDateTime};
use url::Url;

use crate::model::{ValidationIssue, ValidationResult};
use crate::section::Section;

/// Date-only formats, tried in declared order. First success wins; there is
/// no cross-validation between formats, so e.g. `03/04/2026` is accepted as
/// day/month by the earlier `%d/%m/%Y` entry.
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%b-%d-%y",
];

/// Datetime formats, tried after the date-only list.
const DATETIME_FORMATS: [&str; 1] = ["%Y-%m-%d %H:%M:%S"];

fn is_valid_date(value: &str) -> bool {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

/// A ticket value is URL-shaped if it parses as an absolute http(s) URL, or
/// carries an embedded `(http...)` annotation the way flattened spreadsheet
/// cells render hyperlinks.
fn is_url_shaped(value: &str) -> bool {
    if value.contains("(http") {
        return true;
    }
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

pub fn validate_header(section: &Section) -> ValidationResult {
    let mut issues = Vec::new();

    if section.text("Practice/Account").is_none() {
        issues.push(ValidationIssue::error(
            "Practice/Account",
            "Missing Practice/Account",
        ));
    }

    if section.text("Project Name").is_none() {
        issues.push(ValidationIssue::error("Project Name", "Missing Project Name"));
    }

    match section.text("Ticket Hyperlink") {
        None => issues.push(ValidationIssue::error(
            "Ticket Hyperlink",
            "Missing ticket hyperlink",
        )),
        Some(ticket) if !is_url_shaped(ticket) => issues.push(ValidationIssue::error(
            "Ticket Hyperlink",
            "Ticket hyperlink is not a clickable URL or embedded link",
        )),
        Some(_) => {}
    }

    match section.text("Start Date") {
        Some(date) if is_valid_date(date) => {}
        _ => issues.push(ValidationIssue::error(
            "Start Date",
            "Missing or invalid start date",
        )),
    }

    match section.text("Deadline") {
        Some(date) if is_valid_date(date) => {}
        _ => issues.push(ValidationIssue::error(
            "Deadline",
            "Missing or invalid deadline",
        )),
    }

    ValidationResult::from_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header(fields: serde_json::Value) -> Section {
        Section::from_value(&json!({ "fields": fields }))
    }

    fn complete_header() -> Section {
        header(json!({
            "Practice/Account": "Cloud Practice",
            "Project Name": "Apollo Migration",
            "Ticket Hyperlink": "https://tickets.test/PROJ-42",
            "Start Date": "2026-01-31",
            "Deadline": "2026-06-30",
        }))
    }

    #[test]
    fn test_complete_header_passes_cleanly() {
        let result = validate_header(&complete_header());
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_header_one_error_per_field() {
        let result = validate_header(&Section::default());
        assert!(!result.passed);

        let fields: Vec<&str> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "Practice/Account",
                "Project Name",
                "Ticket Hyperlink",
                "Start Date",
                "Deadline"
            ]
        );
    }

    #[test]
    fn test_non_url_ticket_is_error() {
        let section = header(json!({"Ticket Hyperlink": "not-a-url"}));
        let result = validate_header(&section);
        assert!(result.has_error_for("Ticket Hyperlink"));
    }

    #[test]
    fn test_valid_ticket_urls_accepted() {
        for ticket in [
            "https://x.test/1",
            "http://tracker.internal/PROJ-7",
            "PROJ-42 (https://tickets.test/PROJ-42)",
        ] {
            let section = header(json!({"Ticket Hyperlink": ticket}));
            let result = validate_header(&section);
            assert!(!result.has_error_for("Ticket Hyperlink"), "rejected {ticket}");
        }
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let section = header(json!({"Ticket Hyperlink": "ftp://files.test/ticket"}));
        let result = validate_header(&section);
        assert!(result.has_error_for("Ticket Hyperlink"));
    }

    #[test]
    fn test_date_formats() {
        for date in [
            "2026-01-31",
            "2026-01-31 14:30:00",
            "31/01/2026",
            "31-01-2026",
            "01/31/2026",
            "31-Jan-26",
            "31-Jan-2026",
            "Jan-31-26",
        ] {
            assert!(is_valid_date(date), "rejected {date}");
        }

        for date in ["31st of January", "tomorrow", "2026/01/31", ""] {
            assert!(!is_valid_date(date), "accepted {date}");
        }
    }

    #[test]
    fn test_unparseable_dates_are_errors() {
        let section = header(json!({
            "Start Date": "31st of January",
            "Deadline": "soon",
        }));
        let result = validate_header(&section);
        assert!(result.has_error_for("Start Date"));
        assert!(result.has_error_for("Deadline"));
    }
}
