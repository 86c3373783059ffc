//! Chat-completion provider abstraction for the extraction step.
//!
//! Supports OpenAI-compatible endpoints and Azure OpenAI deployments. The
//! extraction call is the only network operation in the pipeline: a single
//! synchronous JSON chat completion with temperature 0 and a JSON response
//! format, no retries and no streaming.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use ureq::Agent;

/// Chat provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Openai,
    Azure,
}

/// Provider configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub openai: Option<OpenaiConfig>,
    #[serde(default)]
    pub azure: Option<AzureConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenaiConfig {
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AzureConfig {
    pub endpoint: String,
    pub deployment: String,
    #[serde(default = "default_azure_api_version")]
    pub api_version: String,
}

fn default_azure_api_version() -> String {
    "2024-02-01".to_string()
}

/// Trait for chat providers
pub trait ChatProvider: std::fmt::Debug {
    /// Send one system+user message pair and return the assistant reply text.
    fn complete(&self, system_prompt: &str, user_payload: &str, model: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// OpenAI-compatible provider (works against api.openai.com and any
/// compatible gateway)
#[derive(Debug)]
pub struct OpenaiProvider {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl ChatProvider for OpenaiProvider {
    fn complete(&self, system_prompt: &str, user_payload: &str, model: &str) -> Result<String> {
        // Validate endpoint URL
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(anyhow!("Invalid endpoint URL: {}", self.endpoint));
        }

        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let url = format!("{}/chat/completions", self.endpoint);
        let request_body = chat_request_body(system_prompt, user_payload, model);

        let agent = Agent::new();
        let response = agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", api_key))
            .send_json(&request_body);

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(401, _)) => {
                return Err(anyhow!("Authentication failed. Check OPENAI_API_KEY env var"));
            }
            Err(ureq::Error::Status(code, response)) => {
                return Err(anyhow!("HTTP {}: {}", code, response.status_text()));
            }
            Err(e) => return Err(anyhow!("HTTP request failed: {}", e)),
        };

        let body: serde_json::Value = response
            .into_json()
            .context("Failed to parse completion response")?;
        extract_reply(&body)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Azure OpenAI provider (deployment-scoped URL, `api-key` header)
#[derive(Debug)]
pub struct AzureOpenaiProvider {
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
    pub api_key: Option<String>,
}

impl ChatProvider for AzureOpenaiProvider {
    fn complete(&self, system_prompt: &str, user_payload: &str, _model: &str) -> Result<String> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(anyhow!("Invalid endpoint URL: {}", self.endpoint));
        }

        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var("AZURE_OPENAI_API_KEY").ok())
            .ok_or_else(|| anyhow!("AZURE_OPENAI_API_KEY environment variable not set"))?;

        // The deployment fixes the model; the model argument is ignored.
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        );
        let request_body = chat_request_body(system_prompt, user_payload, &self.deployment);

        let agent = Agent::new();
        let response = agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("api-key", &api_key)
            .send_json(&request_body);

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(401, _)) => {
                return Err(anyhow!(
                    "Authentication failed. Check AZURE_OPENAI_API_KEY env var"
                ));
            }
            Err(ureq::Error::Status(code, response)) => {
                return Err(anyhow!("HTTP {}: {}", code, response.status_text()));
            }
            Err(e) => return Err(anyhow!("HTTP request failed: {}", e)),
        };

        let body: serde_json::Value = response
            .into_json()
            .context("Failed to parse completion response")?;
        extract_reply(&body)
    }

    fn name(&self) -> &'static str {
        "azure"
    }
}

fn chat_request_body(system_prompt: &str, user_payload: &str, model: &str) -> serde_json::Value {
    let system = if system_prompt.is_empty() {
        // Azure rejects json_object responses unless the prompt mentions JSON.
        "You are a helpful assistant that responds with valid JSON."
    } else {
        system_prompt
    };

    serde_json::json!({
        "model": model,
        "messages": [
            {"role": "system", "content": system},
            {"role": "user", "content": user_payload}
        ],
        "temperature": 0,
        "response_format": {"type": "json_object"},
    })
}

/// Pull the assistant reply text out of a chat-completions response body.
fn extract_reply(body: &serde_json::Value) -> Result<String> {
    let reply = body
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| anyhow!("Completion response has no message content"))?;

    if reply.is_empty() {
        return Err(anyhow!("Empty completion from provider"));
    }

    Ok(reply.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_openai_endpoint() {
        assert_eq!(default_openai_endpoint(), "https://api.openai.com/v1");
    }

    #[test]
    fn test_provider_type_default() {
        let provider_type: ProviderType = Default::default();
        assert_eq!(provider_type, ProviderType::Openai);
    }

    #[test]
    fn test_provider_names() {
        let openai = OpenaiProvider {
            endpoint: default_openai_endpoint(),
            api_key: None,
        };
        assert_eq!(openai.name(), "openai");

        let azure = AzureOpenaiProvider {
            endpoint: "https://example.openai.azure.com".to_string(),
            deployment: "gpt-4o".to_string(),
            api_version: default_azure_api_version(),
            api_key: None,
        };
        assert_eq!(azure.name(), "azure");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let provider = OpenaiProvider {
            endpoint: "localhost:11434".to_string(),
            api_key: Some("key".to_string()),
        };
        let err = provider.complete("", "hello", "gpt-4o").unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint URL"));
    }

    #[test]
    fn test_chat_request_body_shape() {
        let body = chat_request_body("", "payload", "gpt-4o");
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["temperature"], 0);
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][1]["content"], "payload");
        assert!(body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("JSON"));
    }

    #[test]
    fn test_extract_reply() {
        let body = serde_json::json!({
            "choices": [{"message": {"content": "{\"header\": {}}"}}]
        });
        assert_eq!(extract_reply(&body).unwrap(), "{\"header\": {}}");

        let empty = serde_json::json!({"choices": []});
        assert!(extract_reply(&empty).is_err());
    }
}
