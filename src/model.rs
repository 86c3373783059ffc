//! Shared vocabulary for validation outcomes.
//!
//! Every section validator produces a [`ValidationResult`] built from
//! [`ValidationIssue`]s, and the pipeline accumulates those into a
//! [`ValidationRecord`] keyed by [`SectionKey`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Severity of a validation issue.
///
/// `Error` fails the owning section; `Warning` is advisory and never fails a
/// section on its own. The enum is closed: no other severity can be
/// constructed or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// One failed or flagged check against one named field within a section.
///
/// Created only by a validator, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field the check ran against (e.g. `Project Name`,
    /// `Quantitative:Custom Software`).
    pub field: String,
    pub severity: Severity,
    pub description: String,
}

impl ValidationIssue {
    pub fn error(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: Severity::Error,
            description: description.into(),
        }
    }

    pub fn warning(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: Severity::Warning,
            description: description.into(),
        }
    }
}

/// Outcome of validating one section.
///
/// Invariant: `passed` is true iff `issues` contains no [`Severity::Error`]
/// entry. Use [`ValidationResult::from_issues`] so the flag is always derived
/// rather than asserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Build a result from an issue list, deriving `passed`.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let passed = !issues.iter().any(|i| i.severity == Severity::Error);
        Self { passed, issues }
    }

    /// True if any issue targets `field` with ERROR severity.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.issues
            .iter()
            .any(|i| i.field == field && i.severity == Severity::Error)
    }
}

/// The five sections of an intake document, in their fixed validation and
/// reporting order.
///
/// `Ord` follows declaration order, so a `BTreeMap<SectionKey, _>` iterates
/// header first and expected benefits last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Header,
    BusinessCase,
    ProblemStatement,
    ProjectScope,
    ExpectedBenefits,
}

impl SectionKey {
    /// All section keys in validation order.
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Header,
        SectionKey::BusinessCase,
        SectionKey::ProblemStatement,
        SectionKey::ProjectScope,
        SectionKey::ExpectedBenefits,
    ];

    /// The snake_case wire key used in extractor output and JSON reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::BusinessCase => "business_case",
            Self::ProblemStatement => "problem_statement",
            Self::ProjectScope => "project_scope",
            Self::ExpectedBenefits => "expected_benefits",
        }
    }

    /// Human-readable section heading for reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Header => "HEADER",
            Self::BusinessCase => "BUSINESS CASE",
            Self::ProblemStatement => "PROBLEM STATEMENT",
            Self::ProjectScope => "PROJECT SCOPE",
            Self::ExpectedBenefits => "EXPECTED BENEFITS",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate of all section results for one document run.
///
/// Accumulated monotonically by the pipeline; iteration order is the fixed
/// [`SectionKey`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRecord {
    sections: BTreeMap<SectionKey, ValidationResult>,
}

impl ValidationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SectionKey, result: ValidationResult) {
        self.sections.insert(key, result);
    }

    pub fn get(&self, key: SectionKey) -> Option<&ValidationResult> {
        self.sections.get(&key)
    }

    /// Results in fixed section order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &ValidationResult)> {
        self.sections.iter().map(|(k, v)| (*k, v))
    }

    /// True if every recorded section passed. A record with no sections at
    /// all is trivially all-passed; callers that need "all five present and
    /// passed" should check per key.
    pub fn all_passed(&self) -> bool {
        self.sections.values().all(|r| r.passed)
    }
}
