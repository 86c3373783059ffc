//! # Bundled Prompt Management
//!
//! The section extraction prompt and the sections wire schema are embedded at
//! compile time with `include_str!`. `intake init` writes the prompt into
//! `.intake/prompts/` so projects can tune the extraction wording; at run
//! time an on-disk copy wins over the bundled one.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Section extraction prompt - turns flattened document text into sections JSON
pub const SECTION_EXTRACTOR: &str = include_str!("../prompts/section_extractor.md");

/// JSON Schema for the extractor's output object
pub const SECTIONS_SCHEMA: &str = include_str!("../schemas/sections.schema.json");

/// Filename of the extraction prompt inside a prompts directory
pub const SECTION_EXTRACTOR_FILE: &str = "section_extractor.md";

/// Load the section extraction prompt.
///
/// If `prompts_dir` is given and contains `section_extractor.md`, that copy is
/// used; a given-but-unreadable override is an error rather than a silent
/// fallback. Without an override dir the bundled prompt is returned.
pub fn load_section_extractor(prompts_dir: Option<&Path>) -> Result<String> {
    match prompts_dir {
        Some(dir) => {
            let path = dir.join(SECTION_EXTRACTOR_FILE);
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to load prompt: {}", path.display()))
        }
        None => Ok(SECTION_EXTRACTOR.to_string()),
    }
}
