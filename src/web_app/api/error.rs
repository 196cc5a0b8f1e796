// web_app/api/error.rs - Error types for the remote services

use thiserror::Error;

/// Failure talking to the movie catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure talking to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Missing or malformed configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
}
