//! v1 API Data Transfer Objects.
//!
//! Wire format for the REST surface, separate from the domain models in
//! `src/models/`. The analyze endpoints return the flat
//! `MoodAnalysisResult` shape: `{labels, dominantEmotion,
//! musicRecommendations, story}`.

use serde::{Deserialize, Serialize};

use crate::models::{MoodAnalysis, ResolvedTrack};
use crate::photosource::Photo;

/// Request body for `POST /v1/analyze`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    /// URL of the image to analyze. Also the cache key, byte-for-byte.
    pub image_url: String,
}

/// One resolved music recommendation.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub song: String,
    pub artist: String,
    pub spotify_url: String,
}

impl From<ResolvedTrack> for TrackDto {
    fn from(track: ResolvedTrack) -> Self {
        Self {
            song: track.song,
            artist: track.artist,
            spotify_url: track.spotify_url,
        }
    }
}

/// Response body for both analyze endpoints.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysisResponse {
    /// Content labels, upstream confidence order, at most five.
    pub labels: Vec<String>,
    /// `joy`, `sorrow`, `anger`, `surprise`, or `neutral`.
    pub dominant_emotion: String,
    pub music_recommendations: Vec<TrackDto>,
    pub story: String,
}

impl From<MoodAnalysis> for MoodAnalysisResponse {
    fn from(analysis: MoodAnalysis) -> Self {
        Self {
            labels: analysis.labels,
            dominant_emotion: analysis.dominant_emotion.as_str().to_string(),
            music_recommendations: analysis
                .music_recommendations
                .into_iter()
                .map(TrackDto::from)
                .collect(),
            story: analysis.story,
        }
    }
}

/// Query parameters for `GET /v1/tracks/search`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct TrackSearchQuery {
    pub query: String,
}

/// Response body for `GET /v1/tracks/search`: the catalog's top match.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackSearchResponse {
    pub song: String,
    pub artist: String,
    pub spotify_url: String,
}

/// Query parameters for the OAuth callback redirect.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Query parameters for `GET /v1/photos`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoListQuery {
    pub access_token: String,
}

/// Response body for `GET /v1/photos`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PhotoListResponse {
    pub items: Vec<Photo>,
}
