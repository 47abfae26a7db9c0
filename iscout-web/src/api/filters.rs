//! Filter options endpoint
//!
//! The country list and follower bands are static; stored countries and
//! niches reflect whatever searches have produced so far.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::influencers;
use crate::{ApiResult, AppState};
use iscout_common::db::{ContactStatus, FollowerBand};

/// Supported target countries
pub const COUNTRIES: [&str; 25] = [
    "USA",
    "India",
    "Brazil",
    "Indonesia",
    "United Kingdom",
    "Mexico",
    "Germany",
    "France",
    "Turkey",
    "Italy",
    "Spain",
    "Canada",
    "Australia",
    "Japan",
    "South Korea",
    "Russia",
    "Argentina",
    "Colombia",
    "Poland",
    "South Africa",
    "Nigeria",
    "Egypt",
    "UAE",
    "Saudi Arabia",
    "Philippines",
];

/// One selectable follower band
#[derive(Debug, Serialize)]
pub struct BandOption {
    /// Machine value accepted by search and list endpoints
    pub value: &'static str,
    pub label: &'static str,
    pub min_followers: i64,
    pub max_followers: i64,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub countries: Vec<&'static str>,
    /// Countries present in the store
    pub stored_countries: Vec<String>,
    /// Niches present in the store
    pub niches: Vec<String>,
    pub follower_ranges: Vec<BandOption>,
    pub statuses: Vec<&'static str>,
}

/// GET /api/filters
pub async fn get_filters(State(state): State<AppState>) -> ApiResult<Json<FiltersResponse>> {
    let stored_countries = influencers::distinct_countries(&state.db).await?;
    let niches = influencers::distinct_niches(&state.db).await?;

    let follower_ranges = FollowerBand::ALL
        .iter()
        .map(|band| {
            let (min_followers, max_followers) = band.bounds();
            BandOption {
                value: band.as_str(),
                label: band.label(),
                min_followers,
                max_followers,
            }
        })
        .collect();

    let statuses = ContactStatus::ALL.iter().map(|s| s.as_str()).collect();

    Ok(Json(FiltersResponse {
        countries: COUNTRIES.to_vec(),
        stored_countries,
        niches,
        follower_ranges,
        statuses,
    }))
}
