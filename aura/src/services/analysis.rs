use crate::cache::AnalysisCache;
use crate::catalog::CatalogProvider;
use crate::error::{AuraError, Result};
use crate::intelligence::{Narrator, Recommender};
use crate::llm::LlmProvider;
use crate::models::{AnalysisRequest, MoodAnalysis};
use crate::vision::VisionProvider;

/// The mood analysis pipeline.
///
/// One linear chain per request: cache check → vision → recommendation →
/// track resolution → narration → cache write. Vision is the only stage
/// whose failure reaches the caller; every downstream stage degrades to
/// an empty default so the response shape is always complete. Results
/// are cached only for URL-keyed requests whose run had no degraded
/// stage.
#[derive(Clone)]
pub struct AnalysisService {
    cache: AnalysisCache,
    vision: VisionProvider,
    recommender: Recommender,
    narrator: Narrator,
    catalog: CatalogProvider,
}

impl AnalysisService {
    pub fn new(
        cache: AnalysisCache,
        vision: VisionProvider,
        llm: LlmProvider,
        catalog: CatalogProvider,
    ) -> Self {
        Self {
            cache,
            vision,
            recommender: Recommender::new(llm.clone()),
            narrator: Narrator::new(llm),
            catalog,
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<MoodAnalysis> {
        let cache_key = request.cache_key();

        if let Some(key) = cache_key {
            if let Some(cached) = self.cache.lookup(key).await {
                tracing::info!(key, "Analysis cache hit");
                return Ok(cached);
            }
        }

        let vision = self.vision.analyze(request).await.map_err(|error| {
            tracing::error!(%error, "Vision analysis failed");
            AuraError::Analysis(format!("Image could not be analyzed: {error}"))
        })?;

        tracing::info!(
            labels = vision.labels.len(),
            emotion = %vision.dominant_emotion,
            "Vision analysis complete"
        );

        let mut degraded = false;

        let candidates = match self
            .recommender
            .recommend(&vision.labels, vision.dominant_emotion)
            .await
        {
            Ok(candidates) => candidates,
            Err(error) => {
                tracing::warn!(%error, "Recommendation failed, continuing without songs");
                degraded = true;
                Vec::new()
            }
        };

        let music_recommendations = match self.catalog.resolve(&candidates).await {
            Ok(tracks) => tracks,
            Err(error) => {
                tracing::warn!(%error, "Track resolution failed, continuing without links");
                degraded = true;
                Vec::new()
            }
        };

        let story = match self
            .narrator
            .narrate(&vision.labels, vision.dominant_emotion)
            .await
        {
            Ok(story) => story,
            Err(error) => {
                tracing::warn!(%error, "Narration failed, continuing without a story");
                degraded = true;
                String::new()
            }
        };

        let analysis = MoodAnalysis {
            labels: vision.labels,
            dominant_emotion: vision.dominant_emotion,
            music_recommendations,
            story,
        };

        match cache_key {
            Some(key) if !degraded => self.cache.store(key, &analysis).await,
            Some(_) => tracing::debug!("Degraded analysis not cached"),
            None => tracing::debug!("Uploaded bytes carry no cache key, skipping cache write"),
        }

        Ok(analysis)
    }
}
