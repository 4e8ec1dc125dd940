use super::LawStore;
use crate::laws::types::{LawsError, Result};

impl LawStore {
    /// Run database migrations
    pub(super) async fn migrate(&self) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| LawsError::Storage(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS laws (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                mp_comment TEXT NOT NULL DEFAULT '',
                link TEXT NOT NULL DEFAULT '',
                yes_votes INTEGER NOT NULL DEFAULT 0,
                no_votes INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(|e| LawsError::Storage(format!("migration failed (laws): {e}")))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS comments (
                id TEXT PRIMARY KEY,
                law_id TEXT NOT NULL,
                author TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                FOREIGN KEY (law_id) REFERENCES laws(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(|e| LawsError::Storage(format!("migration failed (comments): {e}")))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS votes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                law_id TEXT NOT NULL,
                choice TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                UNIQUE (user_id, law_id),
                FOREIGN KEY (law_id) REFERENCES laws(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(|e| LawsError::Storage(format!("migration failed (votes): {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_comments_law ON comments(law_id)")
            .execute(&mut *tx)
            .await
            .map_err(|e| LawsError::Storage(format!("migration failed (idx_comments_law): {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_votes_law ON votes(law_id)")
            .execute(&mut *tx)
            .await
            .map_err(|e| LawsError::Storage(format!("migration failed (idx_votes_law): {e}")))?;

        tx.commit()
            .await
            .map_err(|e| LawsError::Storage(e.to_string()))?;

        Ok(())
    }
}
