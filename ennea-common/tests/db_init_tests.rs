//! Tests for database initialization and the SQLite result store

use ennea_common::db::{
    init_database, schema_version, NewTestResult, ResultStore, SqliteResultStore, SCHEMA_VERSION,
};
use ennea_common::scoring::{AnswerSet, Category, QUESTIONS};
use tempfile::TempDir;
use uuid::Uuid;

fn investigator_answers() -> AnswerSet {
    let answers = QUESTIONS
        .iter()
        .map(|q| if q.category == Category::Investigator { 5 } else { 3 })
        .collect();
    AnswerSet::new(answers).unwrap()
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("ennea.db");

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("ennea.db");

    let pool1 = init_database(&db_path).await.unwrap();
    pool1.close().await;

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_schema_version_recorded() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("ennea.db")).await.unwrap();

    assert_eq!(schema_version(&pool).await.unwrap(), Some(SCHEMA_VERSION));
}

#[tokio::test]
async fn test_sqlite_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("ennea.db")).await.unwrap();
    let store = SqliteResultStore::new(pool);

    let saved = store
        .save(NewTestResult::score(investigator_answers(), None))
        .await
        .unwrap();
    let loaded = store.get_by_id(saved.id).await.unwrap().expect("result should exist");

    assert_eq!(loaded.id, saved.id);
    assert_eq!(loaded.personality_type, 5);
    assert_eq!(loaded.scores, saved.scores);
    assert_eq!(loaded.scores[Category::Investigator], 25);
    assert_eq!(loaded.answers, saved.answers);
    assert_eq!(loaded.user_id, None);
    assert_eq!(loaded.confidence_score, 0.85);
    // stored with millisecond precision
    assert_eq!(
        loaded.created_at.timestamp_millis(),
        saved.created_at.timestamp_millis()
    );
}

#[tokio::test]
async fn test_sqlite_store_keeps_user_id() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("ennea.db")).await.unwrap();
    let store = SqliteResultStore::new(pool);

    let saved = store
        .save(NewTestResult::score(investigator_answers(), Some("alice".into())))
        .await
        .unwrap();
    let loaded = store.get_by_id(saved.id).await.unwrap().unwrap();

    assert_eq!(loaded.user_id.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_sqlite_store_unknown_id() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("ennea.db")).await.unwrap();
    let store = SqliteResultStore::new(pool);

    assert!(store.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_results_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("ennea.db");

    let saved = {
        let pool = init_database(&db_path).await.unwrap();
        let store = SqliteResultStore::new(pool.clone());
        let saved = store
            .save(NewTestResult::score(investigator_answers(), None))
            .await
            .unwrap();
        pool.close().await;
        saved
    };

    let pool = init_database(&db_path).await.unwrap();
    let store = SqliteResultStore::new(pool);
    let loaded = store.get_by_id(saved.id).await.unwrap();
    assert!(loaded.is_some());
}
