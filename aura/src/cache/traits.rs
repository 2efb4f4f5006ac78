use async_trait::async_trait;

use crate::error::Result;
use crate::models::MoodAnalysis;

/// Point-query key-value store from image URL to computed analysis.
///
/// Keys are compared byte-for-byte; entries are write-once per key with
/// no eviction. Backends only report errors; the soft-failure policy
/// (miss on lookup failure, swallow on store failure) lives in
/// [`crate::cache::AnalysisCache`].
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn lookup(&self, key: &str) -> Result<Option<MoodAnalysis>>;

    async fn store(&self, key: &str, analysis: &MoodAnalysis) -> Result<()>;

    /// Cheap health probe for the status endpoint.
    async fn ping(&self) -> Result<()>;
}
