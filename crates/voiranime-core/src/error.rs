//! Error types for the voiranime scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for voiranime scraper operations
#[derive(Error, Debug)]
pub enum VoiranimeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status: the Cloudflare clearance cookie was rejected
    #[error("Cloudflare clearance rejected (HTTP {0})")]
    Blocked(reqwest::StatusCode),

    /// A CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Text expected to be numeric or date-shaped failed to parse
    #[error("Malformed value: {0}")]
    InvalidFormat(String),

    /// Invalid anime slug provided
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for voiranime scraper operations
pub type Result<T> = std::result::Result<T, VoiranimeError>;
