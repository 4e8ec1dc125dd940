//! Law storage using SQLite
//!
//! Persists laws, their comment threads, and individual vote records.

mod migrations;
mod queries;


use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;

use crate::laws::types::{LawsError, Result};

/// SQLite-based law store
pub struct LawStore {
    pub(super) pool: Pool<Sqlite>,
}

impl LawStore {
    /// Create a new store from database path
    pub async fn from_path(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LawsError::Storage(format!("failed to create directory: {e}")))?;
        }

        let url = format!("sqlite:{}?mode=rwc", path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Check that the database answers a trivial query
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
