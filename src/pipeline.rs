//! Document validation pipeline.
//!
//! Sequences the stages of one run: read the document, extract sections via
//! the language model, validate each section, format the feedback report.
//! Validators are pure and independent; they run sequentially here, and the
//! record's fixed key order keeps the report deterministic either way.
//!
//! Only the read and extract stages can fail, and they fail with stage
//! context. Missing or malformed sections never abort a run: a validator
//! whose section is absent from extraction receives an empty section and
//! reports every required field as missing.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::extract::SectionExtractor;
use crate::model::{SectionKey, ValidationRecord};
use crate::reader::DocumentReader;
use crate::report::format_checklist;
use crate::section::Sections;
use crate::validators::validate_section;

/// Everything a finished run exposes.
#[derive(Debug)]
pub struct PipelineOutput {
    pub source: PathBuf,
    pub document_text: String,
    pub sections: Sections,
    /// Schema deviations in the raw extractor output, for diagnostics.
    pub schema_violations: Vec<String>,
    pub validation: ValidationRecord,
    pub feedback: String,
}

/// The validation pipeline, wired to its two collaborators.
pub struct Pipeline<'a> {
    reader: &'a dyn DocumentReader,
    extractor: &'a dyn SectionExtractor,
}

impl<'a> Pipeline<'a> {
    pub fn new(reader: &'a dyn DocumentReader, extractor: &'a dyn SectionExtractor) -> Self {
        Self { reader, extractor }
    }

    /// Run the full pipeline for one document.
    pub fn run(&self, source: &Path) -> Result<PipelineOutput> {
        let document_text = self
            .reader
            .read_text(source)
            .with_context(|| format!("Read stage failed for {}", source.display()))?;

        let extraction = self
            .extractor
            .extract(&document_text)
            .context("Extraction stage failed")?;

        let validation = validate_sections(&extraction.sections);
        let feedback = format_checklist(&validation);

        Ok(PipelineOutput {
            source: source.to_path_buf(),
            document_text,
            sections: extraction.sections,
            schema_violations: extraction.schema_violations,
            validation,
            feedback,
        })
    }
}

/// Validate every section in fixed order, substituting an empty section for
/// any key extraction did not produce.
pub fn validate_sections(sections: &Sections) -> ValidationRecord {
    let mut record = ValidationRecord::new();
    for key in SectionKey::ALL {
        let section = sections.get(key);
        record.insert(key, validate_section(key, &section));
    }
    record
}
