pub mod backends;
pub(crate) mod schema;
mod traits;

use std::sync::Arc;

use crate::models::MoodAnalysis;

pub use backends::libsql::LibSqlCacheBackend;
pub use backends::memory::MemoryCacheBackend;
pub use traits::CacheBackend;

/// Facade over the cache backend that applies the pipeline's soft-failure
/// policy: lookup failures are downgraded to a miss and store failures
/// are logged and swallowed, so the cache can never fail a request.
#[derive(Clone)]
pub struct AnalysisCache {
    backend: Arc<dyn CacheBackend>,
}

impl AnalysisCache {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    pub async fn lookup(&self, key: &str) -> Option<MoodAnalysis> {
        match self.backend.lookup(key).await {
            Ok(hit) => hit,
            Err(error) => {
                tracing::warn!(key, %error, "Cache lookup failed, treating as a miss");
                None
            }
        }
    }

    pub async fn store(&self, key: &str, analysis: &MoodAnalysis) {
        if let Err(error) = self.backend.store(key, analysis).await {
            tracing::warn!(key, %error, "Cache store failed, result returned uncached");
        }
    }

    pub async fn ping(&self) -> bool {
        self.backend.ping().await.is_ok()
    }
}
