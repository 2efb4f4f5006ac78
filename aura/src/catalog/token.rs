use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::CatalogConfig;
use crate::error::{AuraError, Result};

const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Shared bearer-token cache for the music catalog.
///
/// Clones share one slot. `get` returns the cached token while it is
/// still before its expiry and performs a fresh client-credentials
/// exchange otherwise. No lock is held across the exchange, so callers
/// racing past an expired token may each refresh; the exchange is
/// idempotent and cheap.
#[derive(Clone)]
pub struct TokenCache {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

impl TokenCache {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client_id = config.client_id.clone().ok_or_else(|| {
            AuraError::Catalog("Client id required for catalog token exchange".to_string())
        })?;
        let client_secret = config.client_secret.clone().ok_or_else(|| {
            AuraError::Catalog("Client secret required for catalog token exchange".to_string())
        })?;

        let token_url = config
            .token_url
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuraError::Catalog(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token_url,
            client_id,
            client_secret,
            cached: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn get(&self) -> Result<String> {
        if let Some(token) = self.cached.read().await.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.exchange().await?;
        let access_token = token.access_token.clone();
        *self.cached.write().await = Some(token);
        Ok(access_token)
    }

    async fn exchange(&self) -> Result<CachedToken> {
        let credentials = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));

        let response = self
            .client
            .post(&self.token_url)
            .header("Authorization", format!("Basic {credentials}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AuraError::Catalog(format!("Token exchange failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AuraError::Catalog(format!(
                "Token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuraError::Catalog(format!("Failed to parse token response: {e}")))?;

        tracing::debug!(expires_in = token.expires_in, "Catalog access token refreshed");

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}
