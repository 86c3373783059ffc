//! Section validators.
//!
//! One validator per [`SectionKey`](crate::model::SectionKey), each a pure
//! function over a normalized [`Section`](crate::section::Section). Every
//! validator is a single pass over a fixed rule list in declared order, so
//! issue order is stable across runs. Validators never fail: malformed input
//! was normalized away at the section boundary, and data-quality problems
//! become issues, not errors.

mod benefits;
mod business_case;
mod header;
mod problem;
mod scope;

pub use benefits::{validate_expected_benefits, QUANTITATIVE_FIELDS};
pub use business_case::validate_business_case;
pub use header::validate_header;
pub use problem::validate_problem;
pub use scope::validate_scope;

use crate::model::{SectionKey, ValidationResult};
use crate::section::Section;

/// Run the validator for `key` against `section`.
pub fn validate_section(key: SectionKey, section: &Section) -> ValidationResult {
    match key {
        SectionKey::Header => validate_header(section),
        SectionKey::BusinessCase => validate_business_case(section),
        SectionKey::ProblemStatement => validate_problem(section),
        SectionKey::ProjectScope => validate_scope(section),
        SectionKey::ExpectedBenefits => validate_expected_benefits(section),
    }
}
