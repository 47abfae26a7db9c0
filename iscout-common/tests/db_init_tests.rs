//! Tests for database initialization and schema constraints

use iscout_common::db::{init_database_pool, init_tables};

#[tokio::test]
async fn init_creates_database_file_and_tables() {
    let temp = tempfile::tempdir().expect("temp dir");
    let db_path = temp.path().join("data").join("influencers.db");

    let pool = init_database_pool(&db_path)
        .await
        .expect("should create database");

    assert!(db_path.exists(), "database file should be created");

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .expect("should list tables");

    let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
    assert!(names.contains(&"influencers"));
    assert!(names.contains(&"search_history"));
}

#[tokio::test]
async fn init_tables_is_idempotent() {
    let pool = sqlx::SqlitePool::connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    init_tables(&pool).await.expect("first init");
    init_tables(&pool).await.expect("second init should not fail");
}

#[tokio::test]
async fn handle_uniqueness_enforced_by_schema() {
    let pool = sqlx::SqlitePool::connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    init_tables(&pool).await.expect("init");

    let insert = "INSERT INTO influencers (guid, handle, niche, country, created_at) \
                  VALUES (?, ?, 'fitness', 'USA', '2026-01-01T00:00:00Z')";

    sqlx::query(insert)
        .bind("guid-1")
        .bind("fit_anna")
        .execute(&pool)
        .await
        .expect("first insert");

    let duplicate = sqlx::query(insert)
        .bind("guid-2")
        .bind("fit_anna")
        .execute(&pool)
        .await;
    assert!(duplicate.is_err(), "duplicate handle must violate UNIQUE");

    // ON CONFLICT DO NOTHING is the insert-if-absent path the store uses
    let ignored = sqlx::query(
        "INSERT INTO influencers (guid, handle, niche, country, created_at) \
         VALUES (?, ?, 'fitness', 'USA', '2026-01-01T00:00:00Z') \
         ON CONFLICT(handle) DO NOTHING",
    )
    .bind("guid-3")
    .bind("fit_anna")
    .execute(&pool)
    .await
    .expect("conflict-ignoring insert should succeed");
    assert_eq!(ignored.rows_affected(), 0);
}
