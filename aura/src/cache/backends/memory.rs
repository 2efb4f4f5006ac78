use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::traits::CacheBackend;
use crate::error::Result;
use crate::models::MoodAnalysis;

/// In-memory cache backend. Used by tests and as a zero-setup fallback;
/// entries live for the lifetime of the process.
#[derive(Clone, Default)]
pub struct MemoryCacheBackend {
    entries: Arc<RwLock<HashMap<String, MoodAnalysis>>>,
}

impl MemoryCacheBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheBackend for MemoryCacheBackend {
    async fn lookup(&self, key: &str) -> Result<Option<MoodAnalysis>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn store(&self, key: &str, analysis: &MoodAnalysis) -> Result<()> {
        self.entries
            .write()
            .await
            .entry(key.to_string())
            .or_insert_with(|| analysis.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
