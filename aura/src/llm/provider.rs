use tracing::{info, warn};

use crate::config::LlmConfig;
use crate::error::{AuraError, Result};

use super::api::LlmApiClient;

#[derive(Clone)]
enum LlmBackend {
    Api { client: LlmApiClient },
    Unavailable { reason: String },
}

/// Availability gate in front of the text-generation client. A missing
/// API key degrades to `Unavailable` at startup instead of failing every
/// request at call time with a transport error.
#[derive(Clone)]
pub struct LlmProvider {
    backend: LlmBackend,
    model: String,
}

impl LlmProvider {
    pub fn new(config: &LlmConfig) -> Self {
        let backend = match LlmApiClient::new(config) {
            Ok(client) => {
                info!(model = %config.model, "Generation backend initialized");
                LlmBackend::Api { client }
            }
            Err(e) => {
                let reason = format!("Generation backend unavailable: {e}");
                warn!("{}", reason);
                LlmBackend::Unavailable { reason }
            }
        };

        Self {
            backend,
            model: config.model.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, LlmBackend::Unavailable { .. })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        match &self.backend {
            LlmBackend::Api { client } => client.complete(prompt).await,
            LlmBackend::Unavailable { reason } => Err(AuraError::LlmUnavailable(reason.clone())),
        }
    }
}
