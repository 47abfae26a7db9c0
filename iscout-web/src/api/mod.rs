//! HTTP API handlers for iscout-web

pub mod filters;
pub mod health;
pub mod history;
pub mod influencers;
pub mod search;
pub mod stats;

pub use filters::get_filters;
pub use health::health_routes;
pub use history::get_history;
pub use influencers::{clear_influencers, delete_influencer, list_influencers, update_status};
pub use search::run_search;
pub use stats::get_stats;
