use async_trait::async_trait;
use chrono::Utc;
use libsql::{params, Builder, Connection};
use std::sync::Arc;

use crate::cache::schema;
use crate::cache::traits::CacheBackend;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::models::MoodAnalysis;

/// libsql-backed analysis cache. Local file by default; `libsql://` and
/// `https://` URLs select a remote database.
pub struct LibSqlCacheBackend {
    db: Arc<libsql::Database>,
}

impl LibSqlCacheBackend {
    pub async fn new(config: &CacheConfig) -> Result<Self> {
        let db = if config.url.starts_with("libsql://") || config.url.starts_with("https://") {
            Builder::new_remote(
                config.url.clone(),
                config.auth_token.clone().unwrap_or_default(),
            )
            .build()
            .await?
        } else if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let backend = Self { db: Arc::new(db) };
        schema::init_schema(&backend.connect()?).await?;

        Ok(backend)
    }

    fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }
}

#[async_trait]
impl CacheBackend for LibSqlCacheBackend {
    async fn lookup(&self, key: &str) -> Result<Option<MoodAnalysis>> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                "SELECT analysis FROM analysis_cache WHERE image_url = ?1",
                params![key],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            let analysis: String = row.get(0)?;
            Ok(Some(serde_json::from_str(&analysis)?))
        } else {
            Ok(None)
        }
    }

    async fn store(&self, key: &str, analysis: &MoodAnalysis) -> Result<()> {
        let conn = self.connect()?;

        // Write-once per key: the first stored analysis for a URL wins.
        conn.execute(
            r#"
            INSERT OR IGNORE INTO analysis_cache (image_url, analysis, created_at)
            VALUES (?1, ?2, ?3)
            "#,
            params![
                key,
                serde_json::to_string(analysis)?,
                Utc::now().to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.query("SELECT 1", ()).await?;
        Ok(())
    }
}
