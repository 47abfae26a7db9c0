//! Search orchestration: adapter -> parser -> store
//!
//! The only multi-step workflow in the system. There is no rollback: a
//! failure partway through the insert loop leaves whatever was already
//! inserted in place.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use iscout_common::db::{ContactStatus, FollowerBand, Influencer, SearchHistoryEntry};
use iscout_common::{Error, Result};

use crate::db;
use crate::services::claude_client::ClaudeClient;
use crate::services::profile_parser::{parse_profiles, CandidateProfile};

/// Maximum profiles one search may request from the model
pub const MAX_SEARCH_COUNT: u32 = 25;

/// Validated search parameters
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub niche: String,
    pub country: String,
    pub band: FollowerBand,
    pub count: u32,
}

impl SearchParams {
    /// Validate raw request fields into search parameters
    pub fn new(niche: &str, country: &str, follower_range: &str, count: u32) -> Result<Self> {
        let niche = niche.trim();
        if niche.is_empty() {
            return Err(Error::InvalidInput("niche must not be empty".to_string()));
        }

        let country = country.trim();
        if country.is_empty() {
            return Err(Error::InvalidInput("country must not be empty".to_string()));
        }

        if count == 0 || count > MAX_SEARCH_COUNT {
            return Err(Error::InvalidInput(format!(
                "count must be between 1 and {}",
                MAX_SEARCH_COUNT
            )));
        }

        let band: FollowerBand = follower_range.parse()?;

        Ok(Self {
            niche: niche.to_string(),
            country: country.to_string(),
            band,
            count,
        })
    }
}

/// Result of one search invocation
#[derive(Debug)]
pub struct SearchOutcome {
    /// Candidates the model returned
    pub found: usize,
    /// Records actually inserted (non-duplicate handles)
    pub added: usize,
    /// The newly inserted records
    pub records: Vec<Influencer>,
}

/// Run one search end to end: query the model, parse candidates, insert
/// the ones whose handle is not already known, and append a history entry.
pub async fn run_search(
    pool: &SqlitePool,
    client: &ClaudeClient,
    params: &SearchParams,
) -> Result<SearchOutcome> {
    let raw = client
        .generate_profiles(&params.niche, &params.country, params.band, params.count)
        .await?;

    let candidates = parse_profiles(&raw)?;

    ingest_candidates(pool, params, candidates).await
}

/// Persist parsed candidates and the history entry.
///
/// Split out of `run_search` so dedup and history semantics are testable
/// without the network.
pub async fn ingest_candidates(
    pool: &SqlitePool,
    params: &SearchParams,
    candidates: Vec<CandidateProfile>,
) -> Result<SearchOutcome> {
    let found = candidates.len();
    let mut records = Vec::new();

    for candidate in candidates {
        let record = to_record(params, candidate);
        if db::influencers::insert_if_absent(pool, &record).await? {
            records.push(record);
        } else {
            debug!("Handle already known, skipping: {}", record.handle);
        }
    }

    let (min_followers, max_followers) = params.band.bounds();
    db::history::record_search(
        pool,
        &SearchHistoryEntry {
            guid: Uuid::new_v4(),
            niche: params.niche.clone(),
            country: params.country.clone(),
            follower_band: params.band.as_str().to_string(),
            min_followers,
            max_followers,
            requested: params.count as i64,
            results_count: found as i64,
            created_at: Utc::now(),
        },
    )
    .await?;

    info!(
        niche = %params.niche,
        country = %params.country,
        found,
        added = records.len(),
        "Search completed"
    );

    Ok(SearchOutcome {
        found,
        added: records.len(),
        records,
    })
}

fn to_record(params: &SearchParams, candidate: CandidateProfile) -> Influencer {
    Influencer {
        guid: Uuid::new_v4(),
        handle: candidate.username,
        display_name: candidate.display_name,
        niche: params.niche.clone(),
        followers: candidate.followers,
        country: params.country.clone(),
        summary: candidate.summary,
        content_focus: candidate.content_focus,
        profile_link: candidate.profile_link,
        hashtags: candidate.hashtags,
        open_to_collab: candidate.open_to_collab,
        status: ContactStatus::New,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_reject_blank_niche_and_country() {
        assert!(SearchParams::new("", "USA", "micro", 5).is_err());
        assert!(SearchParams::new("   ", "USA", "micro", 5).is_err());
        assert!(SearchParams::new("fitness", "", "micro", 5).is_err());
    }

    #[test]
    fn params_reject_count_out_of_range() {
        assert!(SearchParams::new("fitness", "USA", "micro", 0).is_err());
        assert!(SearchParams::new("fitness", "USA", "micro", MAX_SEARCH_COUNT + 1).is_err());
        assert!(SearchParams::new("fitness", "USA", "micro", MAX_SEARCH_COUNT).is_ok());
    }

    #[test]
    fn params_reject_unknown_band() {
        let err = SearchParams::new("fitness", "USA", "gigantic", 5);
        assert!(matches!(err, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn params_trim_whitespace() {
        let params = SearchParams::new("  fitness ", " USA  ", "micro", 5).unwrap();
        assert_eq!(params.niche, "fitness");
        assert_eq!(params.country, "USA");
    }
}
