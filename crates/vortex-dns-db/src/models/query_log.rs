use anyhow::Context as _;
use serde::Serialize;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::{FromRow, SqliteConnection};
use vortex_dns_core::QueryRecord;

use super::Model;

/// One row of the resolver's query log.
#[derive(Debug, Serialize, FromRow)]
pub struct QueryLogRow {
    pub id: u32,
    pub timestamp: u32,
    pub domain: String,
    pub record_type: String,
    pub client: String,
    pub blocked: bool,
}

impl QueryLogRow {
    pub fn new(timestamp: u32, domain: String, client: String, record_type: String, blocked: bool) -> Self {
        QueryLogRow {
            id: 0,
            timestamp,
            domain,
            record_type,
            client,
            blocked,
        }
    }

    pub fn into_record(self) -> QueryRecord {
        QueryRecord {
            timestamp: self.timestamp,
            domain: self.domain,
            client: self.client,
            record_type: self.record_type,
            blocked: self.blocked,
        }
    }

    pub async fn select_all(connection: &mut SqliteConnection) -> anyhow::Result<Vec<QueryLogRow>> {
        sqlx::query_as("SELECT * FROM query_log ORDER BY id")
            .fetch_all(connection)
            .await
            .context("error while selecting query logs")
    }
}

impl Model for QueryLogRow {
    const NAME: &'static str = "QueryLogRow";

    async fn bind_and_insert(&self, connection: &mut SqliteConnection) -> anyhow::Result<SqliteQueryResult> {
        sqlx::query(
            "INSERT INTO query_log (timestamp, domain, record_type, client, blocked)
            VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(self.timestamp)
        .bind(&self.domain)
        .bind(&self.record_type)
        .bind(&self.client)
        .bind(self.blocked)
        .execute(connection)
        .await
        .context("error while inserting a log entry")
    }
}
