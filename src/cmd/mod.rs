//! Command handlers for the intake CLI.

pub mod check;
pub mod extract;
pub mod init;
pub mod util;
pub mod validate;

use anyhow::Result;
use std::path::Path;

use intake::config::Config;
use intake::extract::LlmSectionExtractor;
use intake::model::ValidationRecord;
use intake::prompts;
use intake::provider::{ChatProvider, ProviderType};
use intake::report::{format_checklist, format_issue_list, ReportFormat};

/// Build the configured extractor pieces shared by `validate` and `extract`.
pub fn build_extractor<'a>(
    provider: &'a dyn ChatProvider,
    config: &Config,
    prompts_dir: Option<&Path>,
    model_override: Option<&str>,
) -> Result<LlmSectionExtractor<'a>> {
    let prompt_template = prompts::load_section_extractor(prompts_dir)?;
    let model = model_override
        .map(str::to_string)
        .unwrap_or_else(|| config.defaults.model.clone());

    Ok(LlmSectionExtractor {
        provider,
        model,
        prompt_template,
    })
}

/// Resolve the provider from config plus an optional CLI override.
pub fn resolve_provider(
    config: &Config,
    override_name: Option<&str>,
) -> Result<Box<dyn ChatProvider>> {
    let override_type: Option<ProviderType> = override_name
        .map(crate::cli::parse_provider)
        .transpose()?;
    config.provider(override_type)
}

/// Render the record in the requested format.
pub fn render_record(record: &ValidationRecord, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Checklist => format_checklist(record),
        ReportFormat::Issues => format_issue_list(record),
        ReportFormat::Json => serde_json::to_string_pretty(record)?,
    })
}
