//! Search endpoint: AI-backed influencer discovery

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::services::discovery::{self, SearchParams};
use crate::{ApiResult, AppState};
use iscout_common::db::Influencer;

/// POST /api/search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub niche: String,
    pub country: String,
    /// Band machine value: nano, micro, mid-tier, macro, mega, celebrity
    pub follower_range: String,
    /// Number of profiles to request from the model
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    10
}

/// POST /api/search response body
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Candidates the model returned
    pub found: usize,
    /// Records newly inserted (non-duplicate handles)
    pub added: usize,
    pub influencers: Vec<Influencer>,
    pub message: String,
}

/// POST /api/search
///
/// Runs the discovery pipeline and returns the newly inserted records.
/// Provider failures surface as 502, unusable responses as 500; both leave
/// earlier requests' data untouched.
pub async fn run_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Json<SearchResponse>> {
    let params = SearchParams::new(
        &request.niche,
        &request.country,
        &request.follower_range,
        request.count,
    )?;

    let outcome = discovery::run_search(&state.db, &state.claude, &params).await?;

    Ok(Json(SearchResponse {
        found: outcome.found,
        added: outcome.added,
        message: format!(
            "Found {} influencers, added {} new ones",
            outcome.found, outcome.added
        ),
        influencers: outcome.records,
    }))
}
