use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{AuraError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the text-generation service (`generateContent`-shaped API:
/// request parts in, candidate parts out).
#[derive(Clone, Debug)]
pub struct LlmApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl LlmApiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AuraError::Llm("API key required for generation service".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuraError::Llm(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model: config.model.clone(),
        })
    }

    /// Request a free-text completion for a prompt.
    ///
    /// The service has no structured output contract; an absent or empty
    /// completion comes back as an empty string, not an error. Only
    /// transport failures and non-2xx statuses fail.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(AuraError::Validation("Prompt cannot be empty".to_string()));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                self.base_url, self.model, self.api_key
            ))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuraError::Llm(format!("Generation request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AuraError::Llm(format!(
                "Generation service returned {}",
                response.status()
            )));
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AuraError::Llm(format!("Failed to parse generation response: {e}")))?;

        let text = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default();

        tracing::debug!(response_len = text.len(), "Generation response received");
        Ok(text)
    }
}
