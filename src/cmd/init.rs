//! Project scaffolding: write .intake/config.md and the default prompt.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use intake::config::{CONFIG_PATH, DEFAULT_CONFIG};
use intake::prompts::{SECTION_EXTRACTOR, SECTION_EXTRACTOR_FILE};

const PROMPTS_DIR: &str = ".intake/prompts";

pub fn cmd_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", CONFIG_PATH);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", CONFIG_PATH))?;

    let prompts_dir = Path::new(PROMPTS_DIR);
    fs::create_dir_all(prompts_dir)
        .with_context(|| format!("Failed to create {}", prompts_dir.display()))?;
    let prompt_path = prompts_dir.join(SECTION_EXTRACTOR_FILE);
    if !prompt_path.exists() || force {
        fs::write(&prompt_path, SECTION_EXTRACTOR)
            .with_context(|| format!("Failed to write {}", prompt_path.display()))?;
    }

    println!("{} {}", "✓".green(), CONFIG_PATH);
    println!("{} {}", "✓".green(), prompt_path.display());
    println!();
    println!("Set OPENAI_API_KEY (or AZURE_OPENAI_API_KEY) and run:");
    println!("  intake validate <exported-form.csv>");

    Ok(())
}
