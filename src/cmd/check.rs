//! Offline validation of already-extracted sections JSON.
//!
//! Useful for re-running the rule set without a provider round-trip, and for
//! exercising the validators against captured extractor output.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use intake::config::Config;
use intake::pipeline::validate_sections;
use intake::report::ReportFormat;
use intake::section::Sections;
use intake::ui;

use super::render_record;

pub fn cmd_check(file: &Path, format: Option<ReportFormat>) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read sections file: {}", file.display()))?;
    let raw: serde_json::Value = content
        .parse::<serde_json::Value>()
        .with_context(|| format!("Sections file is not valid JSON: {}", file.display()))?;

    let sections = Sections::from_value(&raw);
    let record = validate_sections(&sections);

    let format = format.unwrap_or_else(|| {
        Config::load()
            .map(|c| c.defaults.format)
            .unwrap_or_default()
    });
    match format {
        ReportFormat::Checklist => ui::print_report(&intake::report::format_checklist(&record)),
        _ => println!("{}", render_record(&record, format)?),
    }

    Ok(())
}
