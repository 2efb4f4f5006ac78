use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS analysis_cache (
            image_url TEXT PRIMARY KEY,
            analysis TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .await?;

    Ok(())
}
