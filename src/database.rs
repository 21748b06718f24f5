use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{DatabaseError, Result};

const MEMORY_URL: &str = "sqlite::memory:";

/// The single connection every mapper runs its queries on.
///
/// Backed by a pool capped at one connection that is never recycled, so all
/// statements see the same session and an in-memory database survives for
/// as long as this handle does.
#[derive(Debug, Clone)]
pub struct QuestionsDatabase {
    pool: SqlitePool,
}

impl QuestionsDatabase {
    /// Opens the database named by `config`, creating the file if missing.
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        Self::connect(&config.url).await
    }

    /// Opens a private in-memory database.
    pub async fn memory() -> Result<Self> {
        Self::connect(MEMORY_URL).await
    }

    async fn connect(url: &str) -> Result<Self> {
        let connection_error = |source| DatabaseError::Connection {
            url: url.to_owned(),
            source,
        };
        let options = SqliteConnectOptions::from_str(url)
            .map_err(connection_error)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(connection_error)?;
        info!(url, "opened questions database");
        Ok(Self { pool })
    }

    /// Creates the tables if they are not there yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
