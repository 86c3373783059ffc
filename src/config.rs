//! Configuration for intake projects.
//!
//! Configuration lives in `.intake/config.md` as YAML frontmatter, so the
//! file doubles as human-readable project notes. API keys are never stored
//! here; they come from the environment (`OPENAI_API_KEY`,
//! `AZURE_OPENAI_API_KEY`).

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::provider::{
    AzureOpenaiProvider, ChatProvider, OpenaiProvider, ProviderConfig, ProviderType,
};
use crate::report::ReportFormat;

/// Default config location relative to the working directory.
pub const CONFIG_PATH: &str = ".intake/config.md";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub providers: ProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    /// Default provider (openai, azure)
    #[serde(default)]
    pub provider: ProviderType,
    /// Default model name (ignored by azure, where the deployment decides)
    #[serde(default = "default_model")]
    pub model: String,
    /// Default report format (checklist, issues, json)
    #[serde(default)]
    pub format: ReportFormat,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::default(),
            model: default_model(),
            format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to built-in defaults when
    /// no config file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Build the configured chat provider, applying CLI overrides.
    pub fn provider(&self, override_type: Option<ProviderType>) -> Result<Box<dyn ChatProvider>> {
        let provider_type = override_type.unwrap_or(self.defaults.provider);

        match provider_type {
            ProviderType::Openai => {
                let endpoint = self
                    .providers
                    .openai
                    .as_ref()
                    .map(|c| c.endpoint.clone())
                    .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
                Ok(Box::new(OpenaiProvider {
                    endpoint,
                    api_key: None,
                }))
            }
            ProviderType::Azure => {
                let azure = self.providers.azure.as_ref().ok_or_else(|| {
                    anyhow!(
                        "Azure provider selected but [providers.azure] is not configured \
                         (endpoint and deployment are required)"
                    )
                })?;
                Ok(Box::new(AzureOpenaiProvider {
                    endpoint: azure.endpoint.clone(),
                    deployment: azure.deployment.clone(),
                    api_version: azure.api_version.clone(),
                    api_key: None,
                }))
            }
        }
    }
}

fn extract_frontmatter(content: &str) -> Option<String> {
    let content = content.trim();

    if !content.starts_with("---") {
        return None;
    }

    let rest = &content[3..];
    rest.find("---").map(|end| rest[..end].to_string())
}

/// Default config file written by `intake init`.
pub const DEFAULT_CONFIG: &str = r#"---
defaults:
  provider: openai
  model: gpt-4o-mini
  format: checklist

providers:
  openai:
    endpoint: https://api.openai.com/v1
  # azure:
  #   endpoint: https://YOUR-RESOURCE.openai.azure.com
  #   deployment: gpt-4o
  #   api_version: "2024-02-01"
---

# Intake configuration

API keys are read from the environment: OPENAI_API_KEY or
AZURE_OPENAI_API_KEY. Edit the frontmatter above to switch providers.
"#;
