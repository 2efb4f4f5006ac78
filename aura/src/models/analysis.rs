use serde::{Deserialize, Serialize};

use super::Emotion;

/// Upper bound on content labels kept per image. The vision request asks
/// for this many and the provider truncates anything beyond it.
pub const MAX_LABELS: usize = 5;

/// A single image to analyze, referenced by URL or supplied inline.
///
/// Only URL-backed requests have a cache identity; uploaded bytes carry
/// no stable identifier and bypass the cache entirely.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    Url(String),
    Bytes(Vec<u8>),
}

impl AnalysisRequest {
    /// The cache key for this request, when one exists. Keys are the raw
    /// URL string, byte-for-byte, with no normalization.
    pub fn cache_key(&self) -> Option<&str> {
        match self {
            AnalysisRequest::Url(url) => Some(url),
            AnalysisRequest::Bytes(_) => None,
        }
    }
}

/// A (song, artist) pair mined from generated text, not yet confirmed to
/// exist in the music catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongCandidate {
    pub song: String,
    pub artist: String,
}

/// A candidate confirmed against the catalog, carrying a playable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTrack {
    pub song: String,
    pub artist: String,
    pub spotify_url: String,
}

/// The complete mood analysis for one image. This is the unit cached per
/// image URL and returned to callers; immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub labels: Vec<String>,
    pub dominant_emotion: Emotion,
    pub music_recommendations: Vec<ResolvedTrack>,
    pub story: String,
}
