//! Extraction-only command: stop after the LLM stage and print sections JSON.

use anyhow::Result;
use std::path::{Path, PathBuf};

use intake::config::Config;
use intake::extract::SectionExtractor;
use intake::model::Severity;
use intake::reader::{DocumentReader, TextFileReader};
use intake::ui;

use super::{build_extractor, resolve_provider};

pub fn cmd_extract(
    file: &Path,
    prompts_dir: Option<&PathBuf>,
    provider_override: Option<&str>,
    model_override: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;
    let provider = resolve_provider(&config, provider_override)?;
    let extractor = build_extractor(
        provider.as_ref(),
        &config,
        prompts_dir.map(PathBuf::as_path),
        model_override,
    )?;

    let reader = TextFileReader;
    let document_text = reader.read_text(file)?;
    let extraction = extractor.extract(&document_text)?;

    if !ui::is_quiet() {
        for violation in &extraction.schema_violations {
            eprintln!(
                "{} extraction schema: {}",
                ui::severity_icon(Severity::Warning),
                violation
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&extraction.sections)?);
    Ok(())
}
