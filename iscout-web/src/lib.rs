//! iscout-web - Influencer Scout HTTP service
//!
//! Thin web backend over the discovery pipeline: search requests go out to
//! the Anthropic Messages API, the free-text response is parsed into
//! influencer records, records land in a local SQLite database, and the
//! HTTP surface serves listing/filtering/status/export operations on top.

pub mod api;
pub mod db;
pub mod error;
pub mod export;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::claude_client::ClaudeClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Anthropic Messages API client
    pub claude: ClaudeClient,
}

impl AppState {
    pub fn new(db: SqlitePool, claude: ClaudeClient) -> Self {
        Self { db, claude }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post, put};

    Router::new()
        .route("/api/search", post(api::run_search))
        .route(
            "/api/influencers",
            get(api::list_influencers).delete(api::clear_influencers),
        )
        .route("/api/influencers/:id", delete(api::delete_influencer))
        .route("/api/influencers/:id/status", put(api::update_status))
        .route("/api/stats", get(api::get_stats))
        .route("/api/history", get(api::get_history))
        .route("/api/filters", get(api::get_filters))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
