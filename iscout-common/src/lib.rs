//! # Influencer Scout Common Library
//!
//! Shared code for the Influencer Scout backend:
//! - Error types
//! - Configuration and data directory resolution
//! - Database initialization and models

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
