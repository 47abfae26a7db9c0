//! Search history queries
//!
//! History is append-only: one row per completed search, removed only by a
//! full data reset.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use iscout_common::db::SearchHistoryEntry;
use iscout_common::{Error, Result};

/// Append one history entry
pub async fn record_search(pool: &SqlitePool, entry: &SearchHistoryEntry) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO search_history (
            guid, niche, country, follower_band,
            min_followers, max_followers, requested, results_count, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.guid.to_string())
    .bind(&entry.niche)
    .bind(&entry.country)
    .bind(&entry.follower_band)
    .bind(entry.min_followers)
    .bind(entry.max_followers)
    .bind(entry.requested)
    .bind(entry.results_count)
    .bind(entry.created_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

/// Most recent searches, newest first
pub async fn recent_searches(pool: &SqlitePool, limit: i64) -> Result<Vec<SearchHistoryEntry>> {
    let rows = sqlx::query(
        "SELECT * FROM search_history ORDER BY created_at DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_entry).collect()
}

fn row_to_entry(row: &SqliteRow) -> Result<SearchHistoryEntry> {
    let guid: String = row.try_get("guid")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(SearchHistoryEntry {
        guid: Uuid::parse_str(&guid)
            .map_err(|e| Error::Internal(format!("Bad guid in database: {}", e)))?,
        niche: row.try_get("niche")?,
        country: row.try_get("country")?,
        follower_band: row.try_get("follower_band")?,
        min_followers: row.try_get("min_followers")?,
        max_followers: row.try_get("max_followers")?,
        requested: row.try_get("requested")?,
        results_count: row.try_get("results_count")?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| Error::Internal(format!("Bad timestamp in database: {}", e)))?
            .with_timezone(&Utc),
    })
}
