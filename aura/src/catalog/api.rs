use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::CatalogConfig;
use crate::error::{AuraError, Result};

const DEFAULT_BASE_URL: &str = "https://api.spotify.com";

/// Client for the music catalog's search endpoint. Callers supply the
/// bearer token (see [`super::TokenCache`]).
#[derive(Clone, Debug)]
pub struct CatalogApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Option<Tracks>,
}

#[derive(Debug, Default, Deserialize)]
struct Tracks {
    #[serde(default)]
    items: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

impl CatalogApiClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuraError::Catalog(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Search for the single top track matching a free-text query.
    /// A missing `tracks` object or an empty item list is `None`.
    pub async fn search_top_track(&self, token: &str, query: &str) -> Result<Option<Track>> {
        let response = self
            .client
            .get(format!("{}/v1/search", self.base_url))
            .header("Authorization", format!("Bearer {token}"))
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| AuraError::Catalog(format!("Search request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AuraError::Catalog(format!(
                "Catalog search returned {}",
                response.status()
            )));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| AuraError::Catalog(format!("Failed to parse search response: {e}")))?;

        Ok(search
            .tracks
            .unwrap_or_default()
            .items
            .into_iter()
            .next())
    }
}
