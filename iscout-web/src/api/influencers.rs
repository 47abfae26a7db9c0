//! Influencer listing, status update, delete, and CSV export endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::influencers::{self, InfluencerFilter};
use crate::export;
use crate::{ApiError, ApiResult, AppState};
use iscout_common::db::{ContactStatus, FollowerBand, Influencer};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 500;

/// Query parameters for listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub country: Option<String>,
    pub niche: Option<String>,
    pub status: Option<String>,
    pub follower_range: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// "csv" switches the response to a CSV attachment
    pub format: Option<String>,
}

/// JSON listing response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub influencers: Vec<Influencer>,
    /// Records in this page
    pub count: usize,
    /// Records matching the filter overall
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: u64,
    pub message: String,
}

/// GET /api/influencers
///
/// Filtered listing, newest first. `format=csv` returns the same filtered
/// set as a CSV attachment instead of JSON.
pub async fn list_influencers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Response> {
    let filter = build_filter(&query)?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = query.offset.unwrap_or(0).max(0);

    let records = influencers::list(&state.db, &filter, limit, offset).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = export::to_csv(&records);
        let headers = [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"influencers.csv\"",
            ),
        ];
        return Ok((headers, csv).into_response());
    }

    let total = influencers::count(&state.db, &filter).await?;

    Ok(Json(ListResponse {
        count: records.len(),
        total,
        influencers: records,
    })
    .into_response())
}

/// PUT /api/influencers/:id/status
///
/// Returns the updated record; 404 for an unknown identifier.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> ApiResult<Json<Influencer>> {
    let guid = parse_guid(&id)?;
    let status: ContactStatus = request.status.parse().map_err(ApiError::from)?;

    let record = influencers::update_status(&state.db, guid, status).await?;
    Ok(Json(record))
}

/// DELETE /api/influencers/:id
pub async fn delete_influencer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let guid = parse_guid(&id)?;
    influencers::delete(&state.db, guid).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Influencer deleted".to_string(),
    }))
}

/// DELETE /api/influencers
pub async fn clear_influencers(State(state): State<AppState>) -> ApiResult<Json<ClearResponse>> {
    let cleared = influencers::clear(&state.db).await?;

    Ok(Json(ClearResponse {
        cleared,
        message: format!("Cleared {} influencers", cleared),
    }))
}

fn build_filter(query: &ListQuery) -> ApiResult<InfluencerFilter> {
    let status = match &query.status {
        Some(raw) => Some(raw.parse::<ContactStatus>().map_err(ApiError::from)?),
        None => None,
    };

    let band = match &query.follower_range {
        Some(raw) => Some(raw.parse::<FollowerBand>().map_err(ApiError::from)?),
        None => None,
    };

    Ok(InfluencerFilter {
        country: query.country.clone().filter(|s| !s.is_empty()),
        niche: query.niche.clone().filter(|s| !s.is_empty()),
        status,
        band,
    })
}

fn parse_guid(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid identifier: {}", raw)))
}
