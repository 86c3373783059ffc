//! CLI argument definitions for intake.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use intake::provider::ProviderType;
use intake::report::ReportFormat;

#[derive(Parser)]
#[command(name = "intake")]
#[command(version)]
#[command(about = "Project intake document validation", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    intake init                Write .intake/config.md and the default prompt\n    intake validate form.csv   Validate a document end to end\n    intake check sections.json Validate already-extracted sections offline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an intake document end to end (read, extract, validate, report)
    Validate {
        /// Document to validate (plain-text, CSV or TSV export)
        file: PathBuf,
        /// Directory with a section_extractor.md prompt override
        #[arg(long, value_name = "DIR")]
        prompts_dir: Option<PathBuf>,
        /// Report format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        /// Chat provider override (openai, azure)
        #[arg(long, value_name = "PROVIDER")]
        provider: Option<String>,
        /// Model name override
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,
    },
    /// Run validators and formatter on an already-extracted sections JSON file
    Check {
        /// Sections JSON file (the extractor's output shape)
        file: PathBuf,
        /// Report format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// Stop after extraction and print the normalized sections JSON
    Extract {
        /// Document to extract from
        file: PathBuf,
        /// Directory with a section_extractor.md prompt override
        #[arg(long, value_name = "DIR")]
        prompts_dir: Option<PathBuf>,
        /// Chat provider override (openai, azure)
        #[arg(long, value_name = "PROVIDER")]
        provider: Option<String>,
        /// Model name override
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,
    },
    /// Write .intake/config.md and the default extraction prompt
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Show version information
    Version {
        /// Show build metadata
        #[arg(long)]
        verbose: bool,
    },
}

/// Parse a `--provider` override into a provider type.
pub fn parse_provider(value: &str) -> anyhow::Result<ProviderType> {
    match value.to_lowercase().as_str() {
        "openai" => Ok(ProviderType::Openai),
        "azure" => Ok(ProviderType::Azure),
        other => anyhow::bail!("Unknown provider '{other}' (expected openai or azure)"),
    }
}
