//! OAuth photo-source collaborator (Pinterest-shaped). Supplies the
//! image URLs a user can pick for analysis; the pipeline itself is
//! agnostic to where an image came from.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};
use url::Url;

use crate::config::PhotoSourceConfig;
use crate::error::{AuraError, Result};

const DEFAULT_BASE_URL: &str = "https://api.pinterest.com";
const DEFAULT_AUTHORIZE_URL: &str = "https://www.pinterest.com/oauth/";

const PHOTO_PAGE_SIZE: u32 = 25;
const PHOTO_FIELDS: &str = "id,title,description,media";

/// One photo (pin) from the source provider. `media` is passed through
/// untouched; its shape is the provider's business.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Photo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Object)]
    pub media: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    #[serde(default)]
    items: Vec<Photo>,
    bookmark: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
}

#[derive(Clone)]
struct PhotoSourceApi {
    client: Client,
    base_url: String,
    authorize_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: String,
    /// Single CSRF slot: one in-flight login attempt system-wide.
    login_state: Arc<Mutex<Option<String>>>,
}

#[derive(Clone)]
enum PhotoSourceBackend {
    Api(PhotoSourceApi),
    Unavailable { reason: String },
}

#[derive(Clone)]
pub struct PhotoSourceProvider {
    backend: PhotoSourceBackend,
}

impl PhotoSourceProvider {
    pub fn new(config: &PhotoSourceConfig) -> Self {
        let backend = match Self::build_api(config) {
            Ok(api) => {
                info!("Photo source backend initialized");
                PhotoSourceBackend::Api(api)
            }
            Err(e) => {
                let reason = format!("Photo source backend unavailable: {e}");
                warn!("{}", reason);
                PhotoSourceBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    fn build_api(config: &PhotoSourceConfig) -> Result<PhotoSourceApi> {
        let client_id = config.client_id.clone().ok_or_else(|| {
            AuraError::PhotoSource("Client id required for photo source".to_string())
        })?;
        let client_secret = config.client_secret.clone().ok_or_else(|| {
            AuraError::PhotoSource("Client secret required for photo source".to_string())
        })?;
        let redirect_uri = config.redirect_uri.clone().ok_or_else(|| {
            AuraError::PhotoSource("Redirect URI required for photo source".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuraError::PhotoSource(format!("Failed to create HTTP client: {e}")))?;

        Ok(PhotoSourceApi {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            authorize_url: config
                .authorize_url
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTHORIZE_URL.to_string()),
            client_id,
            client_secret,
            redirect_uri,
            scopes: config.scopes.clone(),
            login_state: Arc::new(Mutex::new(None)),
        })
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, PhotoSourceBackend::Unavailable { .. })
    }

    fn api(&self) -> Result<&PhotoSourceApi> {
        match &self.backend {
            PhotoSourceBackend::Api(api) => Ok(api),
            PhotoSourceBackend::Unavailable { reason } => {
                Err(AuraError::PhotoSourceUnavailable(reason.clone()))
            }
        }
    }

    /// Build the provider authorize URL for a fresh login attempt and
    /// arm the CSRF slot with a new random state token.
    pub async fn login_url(&self) -> Result<String> {
        let api = self.api()?;

        let state: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        *api.login_state.lock().await = Some(state.clone());

        let authorize = Url::parse_with_params(
            &api.authorize_url,
            &[
                ("response_type", "code"),
                ("client_id", api.client_id.as_str()),
                ("redirect_uri", api.redirect_uri.as_str()),
                ("scope", api.scopes.as_str()),
                ("state", state.as_str()),
            ],
        )?;

        info!("Redirecting to photo source OAuth URL");
        Ok(authorize.to_string())
    }

    /// Validate the callback state against the armed slot and exchange
    /// the authorization code for a user access token. The slot is
    /// consumed either way.
    pub async fn exchange_code(&self, code: &str, state: &str) -> Result<String> {
        let api = self.api()?;

        let expected = api.login_state.lock().await.take();
        if expected.as_deref() != Some(state) {
            return Err(AuraError::Validation("Invalid state parameter".to_string()));
        }

        let credentials = STANDARD.encode(format!("{}:{}", api.client_id, api.client_secret));

        let response = api
            .client
            .post(format!("{}/v5/oauth/token", api.base_url))
            .header("Authorization", format!("Basic {credentials}"))
            .form(&[
                ("grant_type", "authorization_code"),
                ("redirect_uri", api.redirect_uri.as_str()),
                ("code", code),
            ])
            .send()
            .await
            .map_err(|e| AuraError::PhotoSource(format!("Code exchange failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AuraError::PhotoSource(format!(
                "Token endpoint returned {}",
                response.status()
            )));
        }

        let token: OAuthTokenResponse = response
            .json()
            .await
            .map_err(|e| AuraError::PhotoSource(format!("Failed to parse token response: {e}")))?;

        info!("Photo source access token obtained");
        Ok(token.access_token)
    }

    /// Fetch the user's photos, following the bookmark cursor until the
    /// provider reports no further pages.
    pub async fn list_photos(&self, access_token: &str) -> Result<Vec<Photo>> {
        let api = self.api()?;

        let mut photos = Vec::new();
        let mut bookmark: Option<String> = None;

        loop {
            let mut request = api
                .client
                .get(format!("{}/v5/pins", api.base_url))
                .header("Authorization", format!("Bearer {access_token}"))
                .query(&[
                    ("page_size", PHOTO_PAGE_SIZE.to_string().as_str()),
                    ("fields", PHOTO_FIELDS),
                ]);

            if let Some(cursor) = &bookmark {
                request = request.query(&[("bookmark", cursor.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| AuraError::PhotoSource(format!("Photo listing failed: {e}")))?;

            if !response.status().is_success() {
                return Err(AuraError::PhotoSource(format!(
                    "Photo listing returned {}",
                    response.status()
                )));
            }

            let page: PhotoPage = response.json().await.map_err(|e| {
                AuraError::PhotoSource(format!("Failed to parse photo listing: {e}"))
            })?;

            photos.extend(page.items);

            match page.bookmark {
                Some(cursor) if !cursor.is_empty() => bookmark = Some(cursor),
                _ => break,
            }
        }

        info!(total = photos.len(), "Photos retrieved from source");
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PhotoSourceConfig {
        PhotoSourceConfig {
            client_id: Some("pid".into()),
            client_secret: Some("psecret".into()),
            redirect_uri: Some("https://aura.example/api/v1/auth/callback".into()),
            base_url: None,
            authorize_url: None,
            scopes: "pins:read".into(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn missing_credentials_leave_the_backend_unavailable() {
        let provider = PhotoSourceProvider::new(&PhotoSourceConfig {
            client_id: None,
            ..config()
        });
        assert!(!provider.is_available());
    }

    #[tokio::test]
    async fn login_url_carries_client_id_scope_and_state() {
        let provider = PhotoSourceProvider::new(&config());
        let url = provider.login_url().await.expect("login url");

        let parsed = Url::parse(&url).expect("valid url");
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("client_id".into(), "pid".into())));
        assert!(pairs.contains(&("scope".into(), "pins:read".into())));

        let state = pairs
            .iter()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.clone())
            .expect("state present");
        assert_eq!(state.len(), 32);
    }

    #[tokio::test]
    async fn each_login_rearms_the_state_slot() {
        let provider = PhotoSourceProvider::new(&config());
        let first = provider.login_url().await.expect("first login");
        let second = provider.login_url().await.expect("second login");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn mismatched_state_is_rejected_before_any_exchange() {
        let provider = PhotoSourceProvider::new(&config());
        provider.login_url().await.expect("arm state");

        let result = provider.exchange_code("some-code", "wrong-state").await;
        assert!(matches!(result, Err(AuraError::Validation(_))));
    }
}
