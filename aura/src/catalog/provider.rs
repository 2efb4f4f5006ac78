use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::error::{AuraError, Result};
use crate::models::{ResolvedTrack, SongCandidate};

use super::api::{CatalogApiClient, Track};
use super::token::TokenCache;

#[derive(Clone)]
enum CatalogBackend {
    Api {
        client: CatalogApiClient,
        tokens: TokenCache,
    },
    Unavailable {
        reason: String,
    },
}

/// Resolves song candidates against the music catalog.
#[derive(Clone)]
pub struct CatalogProvider {
    backend: CatalogBackend,
}

impl CatalogProvider {
    pub fn new(config: &CatalogConfig) -> Self {
        let backend = match TokenCache::new(config).and_then(|tokens| {
            let client = CatalogApiClient::new(config)?;
            Ok((client, tokens))
        }) {
            Ok((client, tokens)) => {
                info!("Catalog backend initialized");
                CatalogBackend::Api { client, tokens }
            }
            Err(e) => {
                let reason = format!("Catalog backend unavailable: {e}");
                warn!("{}", reason);
                CatalogBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, CatalogBackend::Unavailable { .. })
    }

    /// Resolve candidates in order, keeping the first catalog match for
    /// each. A candidate with zero matches or a failed search is skipped
    /// with a warning; a failed token exchange fails the whole stage.
    pub async fn resolve(&self, candidates: &[SongCandidate]) -> Result<Vec<ResolvedTrack>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let (client, tokens) = match &self.backend {
            CatalogBackend::Api { client, tokens } => (client, tokens),
            CatalogBackend::Unavailable { reason } => {
                return Err(AuraError::CatalogUnavailable(reason.clone()))
            }
        };

        let mut resolved = Vec::new();

        for candidate in candidates {
            let token = tokens.get().await?;
            let query = format!("{} {}", candidate.song, candidate.artist);

            match client.search_top_track(&token, &query).await {
                Ok(Some(track)) => match track.external_urls.spotify {
                    Some(spotify_url) => resolved.push(ResolvedTrack {
                        song: candidate.song.clone(),
                        artist: candidate.artist.clone(),
                        spotify_url,
                    }),
                    None => {
                        warn!(
                            song = %candidate.song,
                            artist = %candidate.artist,
                            "Catalog match has no external URL, skipping"
                        );
                    }
                },
                Ok(None) => {
                    warn!(
                        song = %candidate.song,
                        artist = %candidate.artist,
                        "No catalog match, skipping"
                    );
                }
                Err(error) => {
                    warn!(
                        song = %candidate.song,
                        artist = %candidate.artist,
                        %error,
                        "Catalog search failed, skipping"
                    );
                }
            }
        }

        Ok(resolved)
    }

    /// Direct top-track search for the diagnostic passthrough route.
    pub async fn search_track(&self, query: &str) -> Result<Option<Track>> {
        let (client, tokens) = match &self.backend {
            CatalogBackend::Api { client, tokens } => (client, tokens),
            CatalogBackend::Unavailable { reason } => {
                return Err(AuraError::CatalogUnavailable(reason.clone()))
            }
        };

        let token = tokens.get().await?;
        client.search_top_track(&token, query).await
    }
}
