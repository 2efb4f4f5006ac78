use std::sync::Arc;

use crate::cache::AnalysisCache;
use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::llm::LlmProvider;
use crate::photosource::PhotoSourceProvider;
use crate::services::AnalysisService;
use crate::vision::VisionProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: AnalysisCache,
    pub vision: VisionProvider,
    pub llm: LlmProvider,
    pub catalog: CatalogProvider,
    pub photos: PhotoSourceProvider,
    pub analysis: AnalysisService,
}

impl AppState {
    pub fn new(
        config: Config,
        cache: AnalysisCache,
        vision: VisionProvider,
        llm: LlmProvider,
        catalog: CatalogProvider,
        photos: PhotoSourceProvider,
    ) -> Self {
        let analysis = AnalysisService::new(
            cache.clone(),
            vision.clone(),
            llm.clone(),
            catalog.clone(),
        );

        Self {
            config: Arc::new(config),
            cache,
            vision,
            llm,
            catalog,
            photos,
            analysis,
        }
    }
}
