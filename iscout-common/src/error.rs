//! Common error types for Influencer Scout

use thiserror::Error;

/// Common result type for Influencer Scout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared across the workspace
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// External AI provider call failure (network, auth, non-2xx response)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Unusable AI response (no candidates could be extracted)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
