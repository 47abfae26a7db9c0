//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::db::influencers::{self, StoreStats};
use crate::{ApiResult, AppState};

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StoreStats>> {
    let stats = influencers::stats(&state.db).await?;
    Ok(Json(stats))
}
