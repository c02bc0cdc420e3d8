mod models;

use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
pub use models::{Model, QueryLogRow};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use vortex_dns_core::{QueryLogSource, QueryRecord};

/// Pool of connections to the appliance's query log database.
///
/// The resolver writes this table while answering queries; the
/// management API only ever reads it.
#[derive(Debug, Clone)]
pub struct SqliteDb {
    connection_pool: SqlitePool,
}

impl SqliteDb {
    pub async fn new(path: &Path) -> anyhow::Result<Self> {
        // Ensure that all directories exist
        tokio::fs::create_dir_all(path.parent().unwrap_or(Path::new("/")))
            .await
            .context("error while creating parent directories for the query log DB")?;

        let connect_options = SqliteConnectOptions::new().create_if_missing(true).filename(path);

        let connection_pool = SqlitePoolOptions::new()
            .min_connections(3)
            .max_connections(10)
            .max_lifetime(Duration::from_secs(60 * 60 * 8))
            .connect_with(connect_options)
            .await
            .context("error while opening a connection to SQLite DB")?;

        Ok(SqliteDb { connection_pool })
    }

    /// Ephemeral in-memory database. A single shared connection, since
    /// every in-memory connection would otherwise see its own empty DB.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let connection_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .context("error while opening an in-memory SQLite DB")?;

        Ok(SqliteDb { connection_pool })
    }

    pub async fn init_tables(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS query_log (
                id INTEGER PRIMARY KEY,
                timestamp INTEGER NOT NULL,
                domain TEXT NOT NULL,
                record_type TEXT NOT NULL,
                client TEXT NOT NULL,
                blocked INTEGER NOT NULL
            )",
        )
        .execute(&self.connection_pool)
        .await
        .context("error while initializing the 'query_log' table")?;

        Ok(())
    }

    pub async fn get_connection(&self) -> anyhow::Result<PoolConnection<Sqlite>> {
        self.connection_pool
            .acquire()
            .await
            .context("failed to acquire a connection from pool")
    }
}

#[async_trait]
impl QueryLogSource for SqliteDb {
    async fn fetch_log(&self) -> anyhow::Result<Vec<QueryRecord>> {
        let mut connection = self.get_connection().await?;
        let rows = QueryLogRow::select_all(&mut connection).await?;
        Ok(rows.into_iter().map(QueryLogRow::into_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_db() -> SqliteDb {
        let db = SqliteDb::in_memory().await.unwrap();
        db.init_tables().await.unwrap();

        let mut connection = db.get_connection().await.unwrap();
        for (timestamp, domain, client, record_type, blocked) in [
            (10, "a.com", "c1", "A", true),
            (20, "b.com", "c1", "A", false),
            (30, "a.com", "c2", "AAAA", true),
        ] {
            QueryLogRow::new(
                timestamp,
                domain.to_string(),
                client.to_string(),
                record_type.to_string(),
                blocked,
            )
            .insert_into(&mut connection)
            .await
            .unwrap();
        }

        db
    }

    #[tokio::test]
    async fn fetch_log_returns_rows_in_insertion_order() {
        let db = seeded_db().await;

        let log = db.fetch_log().await.unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].domain, "a.com");
        assert_eq!(log[0].timestamp, 10);
        assert!(log[0].blocked);
        assert_eq!(log[1].domain, "b.com");
        assert!(!log[1].blocked);
        assert_eq!(log[2].record_type, "AAAA");
    }

    #[tokio::test]
    async fn fetch_log_on_an_empty_table() {
        let db = SqliteDb::in_memory().await.unwrap();
        db.init_tables().await.unwrap();

        assert!(db.fetch_log().await.unwrap().is_empty());
    }
}
