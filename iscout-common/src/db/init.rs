//! Database connection and schema initialization

use crate::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool.
///
/// Connects to the SQLite file at `db_path`, creating it (and its parent
/// directory) if missing, then ensures the schema exists.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the application tables if they don't exist.
///
/// Handle uniqueness is enforced here; inserts of an already-known handle
/// must use ON CONFLICT(handle) DO NOTHING rather than relying on the
/// application to pre-check.
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS influencers (
            guid TEXT PRIMARY KEY,
            handle TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL DEFAULT '',
            niche TEXT NOT NULL,
            followers INTEGER NOT NULL DEFAULT 0,
            country TEXT NOT NULL,
            summary TEXT NOT NULL DEFAULT '',
            content_focus TEXT NOT NULL DEFAULT '',
            profile_link TEXT NOT NULL DEFAULT '',
            hashtags TEXT NOT NULL DEFAULT '',
            open_to_collab INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'New',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS search_history (
            guid TEXT PRIMARY KEY,
            niche TEXT NOT NULL,
            country TEXT NOT NULL,
            follower_band TEXT NOT NULL,
            min_followers INTEGER NOT NULL,
            max_followers INTEGER NOT NULL,
            requested INTEGER NOT NULL,
            results_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (influencers, search_history)");

    Ok(())
}
