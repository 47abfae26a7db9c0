//! Database access for iscout-web

pub mod history;
pub mod influencers;
