//! Full pipeline validation command.

use anyhow::Result;
use std::path::{Path, PathBuf};

use intake::config::Config;
use intake::model::Severity;
use intake::pipeline::Pipeline;
use intake::reader::TextFileReader;
use intake::report::ReportFormat;
use intake::ui;

use super::{build_extractor, render_record, resolve_provider};

pub fn cmd_validate(
    file: &Path,
    prompts_dir: Option<&PathBuf>,
    format: Option<ReportFormat>,
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
    let output = Pipeline::new(&reader, &extractor).run(file)?;

    if !ui::is_quiet() {
        for violation in &output.schema_violations {
            eprintln!(
                "{} extraction schema: {}",
                ui::severity_icon(Severity::Warning),
                violation
            );
        }
    }

    let format = format.unwrap_or(config.defaults.format);
    match format {
        ReportFormat::Checklist => ui::print_report(&output.feedback),
        _ => println!("{}", render_record(&output.validation, format)?),
    }

    Ok(())
}
