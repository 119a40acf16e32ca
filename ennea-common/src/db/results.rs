//! Test result repository
//!
//! The web layer only sees [`ResultStore`]; the backend is picked at startup.
//! Each [`InMemoryResultStore`] is independent, so tests can build one per
//! case without sharing state.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::models::{NewTestResult, StoredTestResult};
use crate::config::StorageBackend;
use crate::scoring::ScoreVector;
use crate::{time, uuid_utils, Error, Result};

/// Persistence for scored submissions
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist a new result under a freshly generated id
    async fn save(&self, new: NewTestResult) -> Result<StoredTestResult>;

    /// Fetch a result; `Ok(None)` when the id is unknown
    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredTestResult>>;

    /// Which backend this store uses
    fn backend(&self) -> StorageBackend;
}

/// Process-memory store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    results: RwLock<HashMap<Uuid, StoredTestResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save(&self, new: NewTestResult) -> Result<StoredTestResult> {
        let stored = StoredTestResult::from_new(uuid_utils::generate(), time::now(), new);
        self.results.write().await.insert(stored.id, stored.clone());
        debug!("Stored result {} in memory", stored.id);
        Ok(stored)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredTestResult>> {
        Ok(self.results.read().await.get(&id).cloned())
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

/// SQLite-backed store over the `test_results` table
#[derive(Debug, Clone)]
pub struct SqliteResultStore {
    pool: SqlitePool,
}

type ResultRow = (String, Option<String>, String, i64, String, f64, String);

impl SqliteResultStore {
    /// Wrap a pool prepared by [`crate::db::init_database`]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: ResultRow) -> Result<StoredTestResult> {
        let (id, user_id, answers, personality_type, scores, confidence_score, created_at) = row;

        let id = uuid_utils::parse(&id)
            .map_err(|e| Error::Internal(format!("Corrupt result id '{}': {}", id, e)))?;
        let answers: Vec<u8> = serde_json::from_str(&answers)?;
        let scores: Vec<u32> = serde_json::from_str(&scores)?;
        let scores = ScoreVector::from_type_ordered(&scores).ok_or_else(|| {
            Error::Internal(format!("Result {} has {} scores, expected 9", id, scores.len()))
        })?;
        let personality_type = u8::try_from(personality_type)
            .map_err(|_| Error::Internal(format!("Result {} has bad type {}", id, personality_type)))?;
        let created_at = time::parse_rfc3339(&created_at).ok_or_else(|| {
            Error::Internal(format!("Result {} has bad timestamp '{}'", id, created_at))
        })?;

        Ok(StoredTestResult {
            id,
            user_id,
            answers,
            personality_type,
            scores,
            confidence_score,
            created_at,
        })
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn save(&self, new: NewTestResult) -> Result<StoredTestResult> {
        let stored = StoredTestResult::from_new(uuid_utils::generate(), time::now(), new);

        sqlx::query(
            r#"
            INSERT INTO test_results
                (id, user_id, answers, personality_type, scores, confidence_score, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(stored.id.to_string())
        .bind(&stored.user_id)
        .bind(serde_json::to_string(&stored.answers)?)
        .bind(i64::from(stored.personality_type))
        .bind(serde_json::to_string(&stored.scores.as_type_ordered())?)
        .bind(stored.confidence_score)
        .bind(time::to_rfc3339(&stored.created_at))
        .execute(&self.pool)
        .await?;

        debug!("Stored result {} in database", stored.id);
        Ok(stored)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredTestResult>> {
        let row = sqlx::query_as::<_, ResultRow>(
            r#"
            SELECT id, user_id, answers, personality_type, scores, confidence_score, created_at
            FROM test_results
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::from_row).transpose()
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::Sqlite
    }
}
