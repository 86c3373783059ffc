//! Section extraction from raw document text.
//!
//! The [`SectionExtractor`] trait is the seam between the validation core and
//! the language model. The built-in [`LlmSectionExtractor`] fills the bundled
//! prompt with the document text, sends it through a [`ChatProvider`], pulls
//! JSON out of the reply, checks it against the bundled sections schema, and
//! normalizes it into canonical [`Sections`].

use anyhow::{Context, Result};

use crate::provider::ChatProvider;
use crate::section::Sections;

/// Extracted sections plus any schema deviations worth surfacing.
#[derive(Debug)]
pub struct Extraction {
    pub sections: Sections,
    /// Schema violations in the raw extractor output. Reported, not fatal:
    /// normalization already degrades malformed sections to empty ones.
    pub schema_violations: Vec<String>,
}

/// Turns raw document text into extracted sections.
pub trait SectionExtractor {
    fn extract(&self, document_text: &str) -> Result<Extraction>;
}

/// LLM-backed extractor: prompt fill, chat call, JSON recovery, schema check.
pub struct LlmSectionExtractor<'a> {
    pub provider: &'a dyn ChatProvider,
    pub model: String,
    pub prompt_template: String,
}

impl SectionExtractor for LlmSectionExtractor<'_> {
    fn extract(&self, document_text: &str) -> Result<Extraction> {
        let payload = self.prompt_template.replace("{DOCUMENT_TEXT}", document_text);

        let reply = self
            .provider
            .complete("", &payload, &self.model)
            .with_context(|| format!("Section extraction failed ({})", self.provider.name()))?;

        let raw = extract_json_from_output(&reply)
            .context("No JSON found in section extraction reply")?;

        Ok(Extraction {
            schema_violations: check_sections_schema(&raw)?,
            sections: Sections::from_value(&raw),
        })
    }
}

/// Recover the sections object from a model reply.
///
/// Providers wrap JSON unpredictably even with `response_format` set, so this
/// tries fenced ```json blocks, then bare fences, then the whole reply, then
/// the first balanced `{...}` embedded in surrounding prose.
pub fn extract_json_from_output(output: &str) -> Option<serde_json::Value> {
    if let Some(json) = extract_json_code_block(output, "json") {
        return Some(json);
    }

    if let Some(json) = extract_json_code_block(output, "") {
        return Some(json);
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(output.trim()) {
        return Some(json);
    }

    find_json_object_in_text(output)
}

/// Parse the first fenced code block whose language tag matches `lang`
/// (empty `lang` accepts any fence).
fn extract_json_code_block(output: &str, lang: &str) -> Option<serde_json::Value> {
    let mut in_fence = false;
    let mut fence_content = String::new();
    let mut fence_lang = String::new();

    for line in output.lines() {
        let trimmed = line.trim_start();
        if let Some(after_fence) = trimmed.strip_prefix("```") {
            if in_fence {
                in_fence = false;
                if lang.is_empty()
                    || fence_lang.is_empty()
                    || fence_lang.eq_ignore_ascii_case(lang)
                {
                    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&fence_content) {
                        return Some(json);
                    }
                }
                fence_content.clear();
                fence_lang.clear();
            } else {
                in_fence = true;
                fence_lang = after_fence.trim().to_string();
            }
        } else if in_fence {
            if !fence_content.is_empty() {
                fence_content.push('\n');
            }
            fence_content.push_str(line);
        }
    }

    // Replies truncated mid-fence still carry usable JSON.
    if in_fence
        && !fence_content.is_empty()
        && (lang.is_empty() || fence_lang.is_empty() || fence_lang.eq_ignore_ascii_case(lang))
    {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&fence_content) {
            return Some(json);
        }
    }

    None
}

/// Scan for a balanced top-level `{...}` span that parses as JSON.
fn find_json_object_in_text(text: &str) -> Option<serde_json::Value> {
    let mut brace_depth = 0;
    let mut start_idx = None;

    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => {
                if brace_depth == 0 {
                    start_idx = Some(idx);
                }
                brace_depth += 1;
            }
            '}' => {
                brace_depth -= 1;
                if brace_depth == 0 {
                    if let Some(start) = start_idx {
                        let candidate = &text[start..=idx];
                        if let Ok(json) = serde_json::from_str::<serde_json::Value>(candidate) {
                            return Some(json);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Check raw extractor output against the bundled sections schema, returning
/// one message per violation.
pub fn check_sections_schema(raw: &serde_json::Value) -> Result<Vec<String>> {
    let validator = sections_schema_validator()?;
    Ok(validator
        .iter_errors(raw)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                e.to_string()
            } else {
                format!("at '{}': {}", path, e)
            }
        })
        .collect())
}

fn sections_schema_validator() -> Result<jsonschema::Validator> {
    let schema: serde_json::Value = serde_json::from_str(crate::prompts::SECTIONS_SCHEMA)
        .context("Failed to parse bundled sections schema as JSON")?;

    jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile sections schema: {}", e))
}
