//! Common test helpers for integration tests

use anyhow::Result;
use serde_json::json;
use std::path::Path;

use intake::extract::{Extraction, SectionExtractor};
use intake::reader::DocumentReader;
use intake::section::Sections;

/// A fully valid sections object: every validator passes with zero issues.
pub fn complete_sections_json() -> serde_json::Value {
    json!({
        "header": {
            "fields": {
                "Practice/Account": "Cloud Practice",
                "Project Name": "Apollo Migration",
                "Ticket Hyperlink": "https://tickets.test/PROJ-42",
                "Start Date": "2026-01-31",
                "Deadline": "2026-06-30",
            }
        },
        "business_case": {
            "fields": {
                "Why now": "Manual intake is blocking three delivery teams every sprint",
                "Consequences of delay": "Backlog keeps growing and onboarding slips a quarter",
                "Technical justification": "Replaces spreadsheet macros with an automation pipeline",
                "Organizational Impact": "Supports the delivery excellence program",
                "KPI Alignment": "Improves intake throughput and reduces cost per request",
            }
        },
        "problem_statement": {
            "fields": {
                "Problem Definition": "Intake requests arrive as free text and are triaged by hand",
                "Current Pain Points": "Triage takes days and required fields are missing",
                "Business/System Impact": "Projects start late and estimates are unreliable",
                "Who is affected": "Delivery leads and the PMO",
            }
        },
        "project_scope": {
            "fields": {
                "In Scope": "Automated validation for the standard intake template",
                "Out of Scope": "Custom templates and non-English forms",
            }
        },
        "expected_benefits": {
            "fields": {
                "Qualitative Benefits": "Faster intake and fewer review round-trips",
                "Quantitative": {
                    "Tech Hardware": "0",
                    "Custom Hardware": "0",
                    "Software": "12000",
                    "Custom Software": "8000",
                }
            }
        }
    })
}

/// Reader that returns fixed text for any path.
pub struct StubReader(pub String);

impl DocumentReader for StubReader {
    fn read_text(&self, _path: &Path) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Extractor that returns canned sections without touching a provider.
pub struct StubExtractor(pub serde_json::Value);

impl SectionExtractor for StubExtractor {
    fn extract(&self, _document_text: &str) -> Result<Extraction> {
        Ok(Extraction {
            sections: Sections::from_value(&self.0),
            schema_violations: vec![],
        })
    }
}
