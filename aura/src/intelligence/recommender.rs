use regex::Regex;
use std::sync::OnceLock;

use crate::error::Result;
use crate::llm::{prompts, LlmProvider};
use crate::models::{Emotion, SongCandidate};

/// Double-asterisk-delimited, hyphen-separated: `** <song> - <artist> **`.
fn song_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\*\*\s*(.*?)\s*-\s*(.*?)\s*\*\*").expect("song pattern is valid")
    })
}

/// LLM-backed song recommender. Prompts the generation service with the
/// detected mood and mines structured candidates out of whatever prose
/// comes back.
#[derive(Clone)]
pub struct Recommender {
    llm: LlmProvider,
}

impl Recommender {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    /// Recommend songs for a mood. An empty candidate list is a legal
    /// outcome (nothing minable in the completion); only a failed
    /// generation call is an error.
    pub async fn recommend(
        &self,
        labels: &[String],
        emotion: Emotion,
    ) -> Result<Vec<SongCandidate>> {
        let prompt = prompts::music_recommendation_prompt(emotion, labels);
        let completion = self.llm.complete(&prompt).await?;

        let candidates = extract_song_candidates(&completion);
        tracing::info!(
            candidates = candidates.len(),
            "Mined song candidates from generation output"
        );
        Ok(candidates)
    }
}

/// Mine `** Song - Artist **` candidates from free text, in order of
/// appearance, fields trimmed. Best-effort extraction, not a parser:
/// surrounding prose is ignored and matches whose song or artist trims
/// to nothing are dropped as malformed.
pub fn extract_song_candidates(text: &str) -> Vec<SongCandidate> {
    song_pattern()
        .captures_iter(text)
        .filter_map(|captures| {
            let song = captures.get(1)?.as_str().trim();
            let artist = captures.get(2)?.as_str().trim();
            if song.is_empty() || artist.is_empty() {
                return None;
            }
            Some(SongCandidate {
                song: song.to_string(),
                artist: artist.to_string(),
            })
        })
        .collect()
}
