//! PostgreSQL implementation of the presentation store.
//!
//! Every call acquires a connection from the pool, runs its statement and
//! releases the connection when it goes out of scope, so a failed query can
//! never leak a connection.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};
use uuid::Uuid;

use crate::domain::{
    OptionRecord, PollId, PollRecord, PresentationId, PresentationRecord, Vote,
};
use crate::ports::{PresentationStore, StoreError};

/// Idempotent table definitions, run once at startup.
const SCHEMA_STATEMENTS: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS presentation (presentation_id uuid PRIMARY KEY, current_poll_index integer)",
    "CREATE TABLE IF NOT EXISTS poll (poll_id uuid PRIMARY KEY, question VARCHAR(255), presentation_id uuid, index integer)",
    "CREATE TABLE IF NOT EXISTS option (key VARCHAR(255), value VARCHAR(255), poll_id uuid, index integer)",
    "CREATE TABLE IF NOT EXISTS vote (key VARCHAR(255), client_id VARCHAR(255), poll_id uuid)",
];

/// Creates the four tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StoreError::Query(format!("create table: {}", e)))?;
    }
    Ok(())
}

/// Store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresPresentationStore {
    pool: PgPool,
}

impl PostgresPresentationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<PoolConnection<Postgres>, StoreError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

#[async_trait]
impl PresentationStore for PostgresPresentationStore {
    async fn insert_presentation(&self, record: &PresentationRecord) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        sqlx::query("INSERT INTO presentation (presentation_id, current_poll_index) VALUES ($1, $2)")
            .bind(record.id.as_uuid())
            .bind(record.current_poll_index)
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("insert presentation: {}", e)))?;

        Ok(())
    }

    async fn insert_poll(&self, record: &PollRecord) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        sqlx::query("INSERT INTO poll (poll_id, question, presentation_id, index) VALUES ($1, $2, $3, $4)")
            .bind(record.id.as_uuid())
            .bind(&record.question)
            .bind(record.presentation_id.as_uuid())
            .bind(record.index)
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("insert poll: {}", e)))?;

        Ok(())
    }

    async fn insert_option(&self, record: &OptionRecord) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        sqlx::query("INSERT INTO option (key, value, poll_id, index) VALUES ($1, $2, $3, $4)")
            .bind(&record.key)
            .bind(&record.value)
            .bind(record.poll_id.as_uuid())
            .bind(record.index)
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("insert option: {}", e)))?;

        Ok(())
    }

    async fn insert_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        sqlx::query("INSERT INTO vote (key, client_id, poll_id) VALUES ($1, $2, $3)")
            .bind(&vote.key)
            .bind(&vote.client_id)
            .bind(vote.poll_id.as_uuid())
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("insert vote: {}", e)))?;

        Ok(())
    }

    async fn presentation(
        &self,
        id: &PresentationId,
    ) -> Result<Option<PresentationRecord>, StoreError> {
        let mut conn = self.conn().await?;

        let row = sqlx::query(
            "SELECT presentation_id, current_poll_index FROM presentation WHERE presentation_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| StoreError::Query(format!("select presentation: {}", e)))?;

        row.map(row_to_presentation).transpose()
    }

    async fn polls_for_presentation(
        &self,
        presentation_id: &PresentationId,
    ) -> Result<Vec<PollRecord>, StoreError> {
        let mut conn = self.conn().await?;

        let rows = sqlx::query(
            "SELECT poll_id, question, presentation_id, index FROM poll WHERE presentation_id = $1",
        )
        .bind(presentation_id.as_uuid())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| StoreError::Query(format!("select polls: {}", e)))?;

        rows.into_iter().map(row_to_poll).collect()
    }

    async fn options_for_poll(&self, poll_id: &PollId) -> Result<Vec<OptionRecord>, StoreError> {
        let mut conn = self.conn().await?;

        let rows = sqlx::query("SELECT key, value, poll_id, index FROM option WHERE poll_id = $1")
            .bind(poll_id.as_uuid())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("select options: {}", e)))?;

        rows.into_iter().map(row_to_option).collect()
    }

    async fn votes_for_poll(&self, poll_id: &PollId) -> Result<Vec<Vote>, StoreError> {
        let mut conn = self.conn().await?;

        let rows = sqlx::query("SELECT key, client_id, poll_id FROM vote WHERE poll_id = $1")
            .bind(poll_id.as_uuid())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("select votes: {}", e)))?;

        rows.into_iter().map(row_to_vote).collect()
    }

    async fn set_current_poll_index(
        &self,
        presentation_id: &PresentationId,
        index: i32,
    ) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        // Zero rows matched is success: the contract has no existence check here.
        sqlx::query("UPDATE presentation SET current_poll_index = $1 WHERE presentation_id = $2")
            .bind(index)
            .bind(presentation_id.as_uuid())
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("update current poll index: {}", e)))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_presentation(row: PgRow) -> Result<PresentationRecord, StoreError> {
    let id: Uuid = row
        .try_get("presentation_id")
        .map_err(|e| decode("presentation_id", e))?;
    let current_poll_index = row
        .try_get("current_poll_index")
        .map_err(|e| decode("current_poll_index", e))?;

    Ok(PresentationRecord {
        id: PresentationId::from_uuid(id),
        current_poll_index,
    })
}

fn row_to_poll(row: PgRow) -> Result<PollRecord, StoreError> {
    let id: Uuid = row.try_get("poll_id").map_err(|e| decode("poll_id", e))?;
    let question = row.try_get("question").map_err(|e| decode("question", e))?;
    let presentation_id: Uuid = row
        .try_get("presentation_id")
        .map_err(|e| decode("presentation_id", e))?;
    let index = row.try_get("index").map_err(|e| decode("index", e))?;

    Ok(PollRecord {
        id: PollId::from_uuid(id),
        question,
        presentation_id: PresentationId::from_uuid(presentation_id),
        index,
    })
}

fn row_to_option(row: PgRow) -> Result<OptionRecord, StoreError> {
    let key = row.try_get("key").map_err(|e| decode("key", e))?;
    let value = row.try_get("value").map_err(|e| decode("value", e))?;
    let poll_id: Uuid = row.try_get("poll_id").map_err(|e| decode("poll_id", e))?;
    let index = row.try_get("index").map_err(|e| decode("index", e))?;

    Ok(OptionRecord {
        key,
        value,
        poll_id: PollId::from_uuid(poll_id),
        index,
    })
}

fn row_to_vote(row: PgRow) -> Result<Vote, StoreError> {
    let key = row.try_get("key").map_err(|e| decode("key", e))?;
    let client_id = row
        .try_get("client_id")
        .map_err(|e| decode("client_id", e))?;
    let poll_id: Uuid = row.try_get("poll_id").map_err(|e| decode("poll_id", e))?;

    Ok(Vote {
        key,
        client_id,
        poll_id: PollId::from_uuid(poll_id),
    })
}

fn decode(column: &str, e: sqlx::Error) -> StoreError {
    StoreError::Decode(format!("{}: {}", column, e))
}
