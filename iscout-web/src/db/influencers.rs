//! Influencer record queries
//!
//! Insert-if-absent relies on the UNIQUE(handle) constraint rather than a
//! pre-check, so duplicate filtering is atomic under concurrent searches.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, SqlitePool};
use uuid::Uuid;

use iscout_common::db::{ContactStatus, FollowerBand, Influencer};
use iscout_common::{Error, Result};

/// Optional filters for listing/counting records
#[derive(Debug, Clone, Default)]
pub struct InfluencerFilter {
    /// Exact country match
    pub country: Option<String>,
    /// Substring niche match
    pub niche: Option<String>,
    /// Exact status match
    pub status: Option<ContactStatus>,
    /// Follower-count band (inclusive bounds)
    pub band: Option<FollowerBand>,
}

/// Aggregate store statistics
#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub total: i64,
    pub new: i64,
    pub contacted: i64,
    pub responded: i64,
    pub hired: i64,
    pub open_to_collab: i64,
    pub countries: i64,
    pub niches: i64,
}

/// Insert a record unless its handle is already known.
///
/// Returns false when the handle exists; the stored record is not altered.
pub async fn insert_if_absent(pool: &SqlitePool, record: &Influencer) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO influencers (
            guid, handle, display_name, niche, followers, country,
            summary, content_focus, profile_link, hashtags,
            open_to_collab, status, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(handle) DO NOTHING
        "#,
    )
    .bind(record.guid.to_string())
    .bind(&record.handle)
    .bind(&record.display_name)
    .bind(&record.niche)
    .bind(record.followers)
    .bind(&record.country)
    .bind(&record.summary)
    .bind(&record.content_focus)
    .bind(&record.profile_link)
    .bind(&record.hashtags)
    .bind(record.open_to_collab)
    .bind(record.status.as_str())
    .bind(record.created_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// List records matching the filter, newest first
pub async fn list(
    pool: &SqlitePool,
    filter: &InfluencerFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Influencer>> {
    let mut query = QueryBuilder::new("SELECT * FROM influencers WHERE 1=1");
    push_filter(&mut query, filter);
    query.push(" ORDER BY created_at DESC LIMIT ");
    query.push_bind(limit);
    query.push(" OFFSET ");
    query.push_bind(offset);

    let rows = query.build().fetch_all(pool).await?;
    rows.iter().map(row_to_influencer).collect()
}

/// Count records matching the filter, ignoring limit/offset
pub async fn count(pool: &SqlitePool, filter: &InfluencerFilter) -> Result<i64> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM influencers WHERE 1=1");
    push_filter(&mut query, filter);

    let total: i64 = query.build_query_scalar().fetch_one(pool).await?;
    Ok(total)
}

/// Fetch one record by identifier
pub async fn get(pool: &SqlitePool, guid: Uuid) -> Result<Influencer> {
    let row = sqlx::query("SELECT * FROM influencers WHERE guid = ?")
        .bind(guid.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => row_to_influencer(&row),
        None => Err(Error::NotFound(format!("influencer {}", guid))),
    }
}

/// Update a record's status and return the updated record.
///
/// Idempotent: setting the current status again succeeds unchanged.
pub async fn update_status(
    pool: &SqlitePool,
    guid: Uuid,
    status: ContactStatus,
) -> Result<Influencer> {
    let result = sqlx::query("UPDATE influencers SET status = ? WHERE guid = ?")
        .bind(status.as_str())
        .bind(guid.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("influencer {}", guid)));
    }

    get(pool, guid).await
}

/// Delete one record by identifier
pub async fn delete(pool: &SqlitePool, guid: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM influencers WHERE guid = ?")
        .bind(guid.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("influencer {}", guid)));
    }

    Ok(())
}

/// Delete all records, returning how many were removed
pub async fn clear(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM influencers").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Aggregate statistics: totals, per-status counts, distinct dimensions
pub async fn stats(pool: &SqlitePool) -> Result<StoreStats> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM influencers")
        .fetch_one(pool)
        .await?;

    let by_status: Vec<(String, i64)> =
        sqlx::query_as("SELECT status, COUNT(*) FROM influencers GROUP BY status")
            .fetch_all(pool)
            .await?;

    let status_count = |status: ContactStatus| {
        by_status
            .iter()
            .find(|(name, _)| name == status.as_str())
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };

    let open_to_collab: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM influencers WHERE open_to_collab != 0")
            .fetch_one(pool)
            .await?;

    let countries: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT country) FROM influencers")
        .fetch_one(pool)
        .await?;

    let niches: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT niche) FROM influencers")
        .fetch_one(pool)
        .await?;

    Ok(StoreStats {
        total,
        new: status_count(ContactStatus::New),
        contacted: status_count(ContactStatus::Contacted),
        responded: status_count(ContactStatus::Responded),
        hired: status_count(ContactStatus::Hired),
        open_to_collab,
        countries,
        niches,
    })
}

/// Distinct non-empty countries present in the store, sorted
pub async fn distinct_countries(pool: &SqlitePool) -> Result<Vec<String>> {
    let values = sqlx::query_scalar(
        "SELECT DISTINCT country FROM influencers WHERE country != '' ORDER BY country",
    )
    .fetch_all(pool)
    .await?;
    Ok(values)
}

/// Distinct non-empty niches present in the store, sorted
pub async fn distinct_niches(pool: &SqlitePool) -> Result<Vec<String>> {
    let values = sqlx::query_scalar(
        "SELECT DISTINCT niche FROM influencers WHERE niche != '' ORDER BY niche",
    )
    .fetch_all(pool)
    .await?;
    Ok(values)
}

fn push_filter(query: &mut QueryBuilder<'_, sqlx::Sqlite>, filter: &InfluencerFilter) {
    if let Some(country) = &filter.country {
        query.push(" AND country = ");
        query.push_bind(country.clone());
    }

    if let Some(niche) = &filter.niche {
        query.push(" AND niche LIKE ");
        query.push_bind(format!("%{}%", niche));
    }

    if let Some(status) = filter.status {
        query.push(" AND status = ");
        query.push_bind(status.as_str());
    }

    if let Some(band) = filter.band {
        let (min, max) = band.bounds();
        query.push(" AND followers >= ");
        query.push_bind(min);
        query.push(" AND followers <= ");
        query.push_bind(max);
    }
}

fn row_to_influencer(row: &SqliteRow) -> Result<Influencer> {
    let guid: String = row.try_get("guid")?;
    let status: String = row.try_get("status")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(Influencer {
        guid: Uuid::parse_str(&guid)
            .map_err(|e| Error::Internal(format!("Bad guid in database: {}", e)))?,
        handle: row.try_get("handle")?,
        display_name: row.try_get("display_name")?,
        niche: row.try_get("niche")?,
        followers: row.try_get("followers")?,
        country: row.try_get("country")?,
        summary: row.try_get("summary")?,
        content_focus: row.try_get("content_focus")?,
        profile_link: row.try_get("profile_link")?,
        hashtags: row.try_get("hashtags")?,
        open_to_collab: row.try_get::<i64, _>("open_to_collab")? != 0,
        status: status
            .parse()
            .map_err(|_| Error::Internal(format!("Bad status in database: {}", status)))?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| Error::Internal(format!("Bad timestamp in database: {}", e)))?
            .with_timezone(&Utc),
    })
}
